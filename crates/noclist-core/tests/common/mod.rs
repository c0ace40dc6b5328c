pub mod noc_server;
