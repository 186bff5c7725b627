use std::io::BufRead;

use chuckle_app::app;
use chuckle_app::runtime::{stdout_reconciler, Runtime};
use chuckle_core::tracing_observer;
use tokio::runtime::Builder;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");

    let runtime = Runtime::new(
        app::init,
        app::update,
        app::view,
        stdout_reconciler(),
        tracing_observer(),
    );

    // Each stdin line is the "fetch a joke" button; EOF quits.
    let ports = runtime.ports();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            if line.is_err() {
                break;
            }
            ports.fetch_joke.send();
        }
        ports.quit.send();
    });

    rt.block_on(runtime.run());
}
