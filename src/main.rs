//! Office CRM
//!
//! Front-end for a small office-leasing CRM built with Leptos (WASM).
//!
//! # Features
//!
//! - Login and tenant self-registration
//! - Offices, bookings, contracts, payments, maintenance requests, tenants
//! - Role-based menus and actions (admin / tenant / staff)
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It is a pure presentation layer over the CRM REST API: all
//! business rules (availability, overdue detection, contract lifecycle) are
//! enforced server-side and only invoked from here.

use leptos::*;

mod api;
mod app;
mod components;
mod model;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
