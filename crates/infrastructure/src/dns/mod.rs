pub mod record_type_map;
pub mod server;

pub use record_type_map::RecordTypeMapper;
pub use server::DnsServerHandler;
