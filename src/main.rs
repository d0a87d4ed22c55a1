//! Factory portal main entrypoint.

use factory_portal::run;
use factory_portal::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
