mod command_restarter;
mod output;

pub use command_restarter::CommandRestarter;
