//! Entity records
//!
//! Records are exchanged with the server as-is; the front-end never
//! validates or transforms their shape beyond presence checks at submit.

use chrono::NaiveDate;

/// Office status as stored server-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfficeStatus {
    Vacant,
    Occupied,
}

impl OfficeStatus {
    pub fn label(self) -> &'static str {
        match self {
            OfficeStatus::Vacant => "Vacant",
            OfficeStatus::Occupied => "Occupied",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OfficeStatus::Vacant => "vacant",
            OfficeStatus::Occupied => "occupied",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "vacant" => Some(OfficeStatus::Vacant),
            "occupied" => Some(OfficeStatus::Occupied),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Office {
    pub id: i64,
    pub address: String,
    pub area: u32,
    pub rooms: u32,
    pub rent: i64,
    pub status: OfficeStatus,
}

/// Body for office create and update calls.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OfficePayload {
    pub address: String,
    pub area: u32,
    pub rooms: u32,
    pub rent: i64,
    pub status: OfficeStatus,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Booking {
    pub id: i64,
    pub office_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Body for booking creation. Overlap checks are the server's job.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BookingPayload {
    pub office_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Contract lifecycle is fully server-managed; this layer only reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Active,
    Completed,
    Terminated,
}

impl ContractStatus {
    pub fn label(self) -> &'static str {
        match self {
            ContractStatus::Active => "Active",
            ContractStatus::Completed => "Completed",
            ContractStatus::Terminated => "Terminated",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Contract {
    pub id: i64,
    pub office_id: i64,
    pub status: ContractStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cost: i64,
    pub deposit: i64,
}

/// Payment status. "Overdue" is only ever set by the server-side sweep,
/// never offered for direct selection in a form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
    Overdue,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Overdue => "Overdue",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Overdue => "overdue",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "unpaid" => Some(PaymentStatus::Unpaid),
            "paid" => Some(PaymentStatus::Paid),
            "overdue" => Some(PaymentStatus::Overdue),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Payment {
    pub id: i64,
    pub contract_id: i64,
    pub amount: i64,
    pub payment_date: NaiveDate,
    pub status: PaymentStatus,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PaymentPayload {
    pub contract_id: i64,
    pub amount: i64,
    pub payment_date: NaiveDate,
    pub status: PaymentStatus,
}

/// Maintenance request status. Staff advance it forward one step at a
/// time; there is no way back from this layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    New,
    InProgress,
    Done,
}

impl RequestStatus {
    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::New => "New",
            RequestStatus::InProgress => "In progress",
            RequestStatus::Done => "Done",
        }
    }

    /// The single next step, if any.
    pub fn next(self) -> Option<RequestStatus> {
        match self {
            RequestStatus::New => Some(RequestStatus::InProgress),
            RequestStatus::InProgress => Some(RequestStatus::Done),
            RequestStatus::Done => None,
        }
    }

    /// Button caption for the staff advance action.
    pub fn advance_label(self) -> Option<&'static str> {
        match self {
            RequestStatus::New => Some("Start work"),
            RequestStatus::InProgress => Some("Complete"),
            RequestStatus::Done => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct MaintenanceRequest {
    pub id: i64,
    pub contract_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub status: RequestStatus,
    pub created_at: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RequestPayload {
    pub contract_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// Partial update used by the staff advance action.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RequestStatusPatch {
    pub status: RequestStatus,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Tenant {
    pub id: i64,
    pub company_name: String,
    pub contact_person: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_status_advances_one_step() {
        assert_eq!(RequestStatus::New.next(), Some(RequestStatus::InProgress));
        assert_eq!(
            RequestStatus::InProgress.next(),
            Some(RequestStatus::Done)
        );
        assert_eq!(RequestStatus::Done.next(), None);
    }

    #[test]
    fn test_request_status_wire_form() {
        let json = serde_json::to_string(&RequestStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");

        let back: RequestStatus = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(back, RequestStatus::Done);
    }

    #[test]
    fn test_office_payload_carries_exactly_the_form_fields() {
        let payload = OfficePayload {
            address: "Main St 1".to_string(),
            area: 50,
            rooms: 3,
            rent: 10_000,
            status: OfficeStatus::Vacant,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "address": "Main St 1",
                "area": 50,
                "rooms": 3,
                "rent": 10000,
                "status": "vacant",
            })
        );
    }

    #[test]
    fn test_request_kind_serializes_as_type() {
        let payload = RequestPayload {
            contract_id: 7,
            kind: "Repair".to_string(),
            description: "Broken lock".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], "Repair");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_status_parse_round_trips() {
        for status in [OfficeStatus::Vacant, OfficeStatus::Occupied] {
            assert_eq!(OfficeStatus::parse(status.as_str()), Some(status));
        }
        for status in [
            PaymentStatus::Unpaid,
            PaymentStatus::Paid,
            PaymentStatus::Overdue,
        ] {
            assert_eq!(PaymentStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OfficeStatus::parse("demolished"), None);
    }

    #[test]
    fn test_tenant_email_defaults_to_none() {
        let tenant: Tenant = serde_json::from_str(
            r#"{"id":1,"company_name":"Acme LLC","contact_person":"J. Smith","phone":"+70000000000"}"#,
        )
        .unwrap();
        assert_eq!(tenant.email, None);
    }
}
