//! kesimlog main entrypoint.

use kesimlog::run;

fn main() {
    if let Err(e) = run() {
        kesimlog::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
