pub mod dns;
pub mod signal;

pub use dns::{bind_udp_socket, run_udp_worker};
pub use signal::wait_for_shutdown_signal;
