pub mod machine_command;
pub mod resolver_file;

pub use machine_command::CommandMachineResolver;
pub use resolver_file::{
    select_registration, select_registration_for, NoopRegistration, ResolverFileRegistration,
};
