use leptos::mount::mount_to_body;
use truss_field::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
