use dioxus::logger::tracing::Level;

use dropsurface::App;

fn main() {
    dioxus::logger::init(Level::INFO).unwrap();
    dioxus::launch(App);
}
