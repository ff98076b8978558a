mod components;

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger already initialised: {e}");
    }
    dioxus::launch(components::app::App);
}
