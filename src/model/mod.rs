//! Data model
//!
//! Plain records exchanged with the CRM API, their closed status
//! enumerations, and the role/capability tables.

pub mod records;
pub mod role;

pub use records::{
    Booking, BookingPayload, Contract, ContractStatus, MaintenanceRequest, Office, OfficePayload,
    OfficeStatus, Payment, PaymentPayload, PaymentStatus, RequestPayload, RequestStatus,
    RequestStatusPatch, Tenant,
};
pub use role::{permits, Action, Role, Screen};
