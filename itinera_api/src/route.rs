pub mod route_handler;
