mod api;
mod error;
mod services;
