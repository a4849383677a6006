//! Cart & Lead Admin UI Entry Point

mod api;
mod app;
mod board;
mod cart;
mod components;
mod config;
mod console;
mod context;
mod cookie;
mod dom;
mod error;
mod lead;
mod page;
mod scroll;
mod status_select;
mod whatsapp;

#[cfg(test)]
mod testing;

fn main() {
    console_error_panic_hook::set_once();
    app::start();
}
