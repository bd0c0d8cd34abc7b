//! QR table onboarding
//!
//! A decoded table QR carries `<businessId>/table-<n>`.

use crate::redirect::{MENU_PATH, Redirect};
use crate::session::Session;
use crate::{ClientError, ClientResult};

const TABLE_SEPARATOR: &str = "/table-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableQr {
    pub business_id: i64,
    pub table_number: i64,
}

impl TableQr {
    pub fn parse(payload: &str) -> ClientResult<Self> {
        let invalid = || ClientError::Validation("Invalid QR code".into());
        let (business, table) = payload.trim().split_once(TABLE_SEPARATOR).ok_or_else(invalid)?;
        let business_id = business.trim().parse().map_err(|_| invalid())?;
        let table_number: i64 = table.trim().parse().map_err(|_| invalid())?;
        if table_number < 1 {
            return Err(invalid());
        }
        Ok(Self {
            business_id,
            table_number,
        })
    }
}

/// Store the business and table from a QR payload, then go to the menu
pub fn apply_table_qr(session: &Session, payload: &str) -> ClientResult<Redirect> {
    let qr = TableQr::parse(payload).inspect_err(|_| tracing::warn!(payload, "Invalid QR format"))?;
    session.set_business_id(qr.business_id)?;
    session.set_table_number(qr.table_number)?;
    tracing::info!(business_id = qr.business_id, table = qr.table_number, "Table QR applied");
    Ok(Redirect::now(MENU_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_table_qr() {
        let session = Session::in_memory();
        let redirect = apply_table_qr(&session, "1/table-5").unwrap();
        assert_eq!(redirect.path, MENU_PATH);
        assert_eq!(session.business_id(), Some(1));
        assert_eq!(session.table_number(), Some(5));
    }

    #[test]
    fn test_malformed_payloads() {
        for payload in ["", "1", "1/table-", "/table-3", "x/table-2", "1/table-0", "1/tbl-2"] {
            assert!(TableQr::parse(payload).is_err(), "{payload}");
        }
    }
}
