//! `App` owns the session: state, browser stores, timers and the API client.
//! Every state change goes through `App::dispatch`.

use std::cell::{RefCell, RefMut};
use std::rc::{Rc, Weak};

use web_sys::Document;

use crate::command_executors;
use crate::constants::HISTORY_AUTOSAVE_INTERVAL_MS;
use crate::messages::Message;
use crate::network::{ApiClient, ApiConfig};
use crate::scheduler::Scheduler;
use crate::state::AppState;
use crate::storage::{self, KeyValueStore, MemoryStore};
use crate::update::update;
use crate::views::{self, RenderCache};

pub struct App {
    state: RefCell<AppState>,
    scheduler: RefCell<Scheduler>,
    api: ApiClient,
    settings_store: Rc<dyn KeyValueStore>,
    history_store: Rc<dyn KeyValueStore>,
    document: Document,
    render_cache: RenderCache,
}

impl App {
    /// Build the session, reading persisted settings once.
    pub fn new(document: Document, config: ApiConfig) -> Rc<Self> {
        let settings_store = store_or_memory(storage::local_storage(), "localStorage");
        let history_store = store_or_memory(storage::session_storage(), "sessionStorage");
        let settings = storage::load_settings(settings_store.as_ref());
        crate::debug_log!("Loaded settings: {:?}", settings);

        Rc::new(Self {
            state: RefCell::new(AppState::new(settings)),
            scheduler: RefCell::new(Scheduler::new()),
            api: ApiClient::new(config),
            settings_store,
            history_store,
            document,
            render_cache: RenderCache::new(),
        })
    }

    /// Restore the saved transcript, start autosave and draw the first frame.
    pub fn start(self: &Rc<Self>) {
        let restored = storage::load_history(self.history_store.as_ref());
        if !restored.is_empty() {
            self.dispatch(Message::HistoryRestored(restored));
        }

        let weak = Rc::downgrade(self);
        self.scheduler
            .borrow_mut()
            .start_autosave(HISTORY_AUTOSAVE_INTERVAL_MS, move || {
                dispatch_weak(&weak, Message::AutosaveTick);
            });

        self.render();
    }

    pub fn dispatch(self: &Rc<Self>, msg: Message) {
        let commands = {
            let mut state = self.state.borrow_mut();
            update(&mut state, msg)
        };

        self.render();

        for cmd in commands {
            command_executors::execute(self, cmd);
        }
    }

    pub fn render(&self) {
        let state = self.state.borrow();
        if let Err(e) = views::render(&state, &self.document, &self.render_cache) {
            crate::warn_log!("Failed to render: {:?}", e);
        }
    }

    /// Cancel every pending timer.  The instance is inert afterwards.
    pub fn teardown(&self) {
        self.scheduler.borrow_mut().cancel_all();
        crate::debug_log!("Session torn down");
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn settings_store(&self) -> &dyn KeyValueStore {
        self.settings_store.as_ref()
    }

    pub fn history_store(&self) -> &dyn KeyValueStore {
        self.history_store.as_ref()
    }

    pub fn scheduler(&self) -> RefMut<'_, Scheduler> {
        self.scheduler.borrow_mut()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Dispatch through a weak handle; a no-op once the app is gone.  Used by
/// timer callbacks so the scheduler never keeps the app alive.
pub fn dispatch_weak(app: &Weak<App>, msg: Message) {
    if let Some(app) = app.upgrade() {
        app.dispatch(msg);
    }
}

fn store_or_memory(store: Option<web_sys::Storage>, name: &str) -> Rc<dyn KeyValueStore> {
    match store {
        Some(store) => Rc::new(store),
        None => {
            crate::warn_log!("{} unavailable, keeping data in memory", name);
            Rc::new(MemoryStore::new())
        }
    }
}
