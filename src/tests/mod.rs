mod file_validation_prop;
mod render_dom;
mod support;
mod upload_flow;
