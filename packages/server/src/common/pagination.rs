//! Relay-style cursor pagination for the admin member table.
//!
//! Cursors are opaque base64-encoded row UUIDs. The member model resolves a
//! cursor back to its row's sort key (update recency), so the cursor stays a
//! single UUID even though the ordering is by `(updated_at, id)`.

use anyhow::{Context, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use juniper::GraphQLObject;
use uuid::Uuid;

/// Opaque pagination cursor encoding for row ids.
pub struct Cursor;

impl Cursor {
    pub fn encode(id: Uuid) -> String {
        URL_SAFE_NO_PAD.encode(id.as_bytes())
    }

    pub fn decode(s: &str) -> Result<Uuid> {
        let bytes = URL_SAFE_NO_PAD
            .decode(s)
            .context("Invalid cursor: not valid base64")?;
        let id = Uuid::from_slice(&bytes).context("Invalid cursor: not a valid UUID")?;
        Ok(id)
    }
}

/// Page information for cursor-based pagination.
#[derive(Debug, Clone, Default, GraphQLObject)]
#[graphql(description = "Information about pagination in a connection")]
pub struct PageInfo {
    /// When paginating forwards, are there more items?
    pub has_next_page: bool,
    /// When paginating backwards, are there more items?
    pub has_previous_page: bool,
    /// Cursor of the first edge in the page.
    pub start_cursor: Option<String>,
    /// Cursor of the last edge in the page.
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Forward,
    Backward,
}

/// Raw first/after/last/before arguments as they arrive from GraphQL.
#[derive(Debug, Clone, Default)]
pub struct PageArgs {
    pub first: Option<i32>,
    pub after: Option<String>,
    pub last: Option<i32>,
    pub before: Option<String>,
}

impl PageArgs {
    /// Validate per the Relay connection spec: one direction at a time,
    /// limit defaulted to 50 and clamped to 1-100, cursor decoded.
    pub fn validate(&self) -> Result<ValidatedPageArgs, &'static str> {
        if (self.first.is_some() || self.after.is_some())
            && (self.last.is_some() || self.before.is_some())
        {
            return Err("Cannot use first/after with last/before");
        }

        let direction = if self.last.is_some() || self.before.is_some() {
            PageDirection::Backward
        } else {
            PageDirection::Forward
        };

        let limit = self.first.or(self.last).unwrap_or(50).clamp(1, 100);

        let cursor_str = match direction {
            PageDirection::Forward => self.after.as_ref(),
            PageDirection::Backward => self.before.as_ref(),
        };
        let cursor = cursor_str
            .map(|c| Cursor::decode(c))
            .transpose()
            .map_err(|_| "Invalid cursor")?;

        Ok(ValidatedPageArgs {
            limit,
            cursor,
            direction,
        })
    }
}

/// Validated and normalized pagination arguments.
#[derive(Debug, Clone)]
pub struct ValidatedPageArgs {
    pub limit: i32,
    pub cursor: Option<Uuid>,
    pub direction: PageDirection,
}

impl ValidatedPageArgs {
    /// SQL LIMIT: one extra row to detect whether more pages exist.
    pub fn fetch_limit(&self) -> i64 {
        (self.limit + 1) as i64
    }

    pub fn is_forward(&self) -> bool {
        self.direction == PageDirection::Forward
    }
}

/// Trim an over-fetched result set to the requested limit.
///
/// Queries fetch `limit + 1` rows; the surplus row only signals that another
/// page exists and is dropped here.
pub fn trim_page<T>(rows: Vec<T>, limit: i32) -> (Vec<T>, bool) {
    let has_more = rows.len() > limit as usize;
    let rows = if has_more {
        rows.into_iter().take(limit as usize).collect()
    } else {
        rows
    };
    (rows, has_more)
}

/// Assemble PageInfo from a trimmed page.
pub fn page_info(
    has_more: bool,
    args: &ValidatedPageArgs,
    start_cursor: Option<String>,
    end_cursor: Option<String>,
) -> PageInfo {
    match args.direction {
        PageDirection::Forward => PageInfo {
            has_next_page: has_more,
            has_previous_page: args.cursor.is_some(),
            start_cursor,
            end_cursor,
        },
        PageDirection::Backward => PageInfo {
            has_next_page: args.cursor.is_some(),
            has_previous_page: has_more,
            start_cursor,
            end_cursor,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_round_trip() {
        let id = Uuid::new_v4();
        let encoded = Cursor::encode(id);
        assert_eq!(Cursor::decode(&encoded).unwrap(), id);
    }

    #[test]
    fn test_cursor_rejects_garbage() {
        assert!(Cursor::decode("not base64 !!!").is_err());
        // Valid base64, wrong byte count.
        let short = URL_SAFE_NO_PAD.encode(b"abc");
        assert!(Cursor::decode(&short).is_err());
    }

    #[test]
    fn test_validate_defaults_forward() {
        let validated = PageArgs::default().validate().unwrap();
        assert_eq!(validated.limit, 50);
        assert!(validated.cursor.is_none());
        assert!(validated.is_forward());
    }

    #[test]
    fn test_validate_backward() {
        let args = PageArgs {
            last: Some(5),
            ..Default::default()
        };
        let validated = args.validate().unwrap();
        assert_eq!(validated.limit, 5);
        assert_eq!(validated.direction, PageDirection::Backward);
    }

    #[test]
    fn test_validate_clamps_limit() {
        let args = PageArgs {
            first: Some(500),
            ..Default::default()
        };
        assert_eq!(args.validate().unwrap().limit, 100);

        let args = PageArgs {
            first: Some(0),
            ..Default::default()
        };
        assert_eq!(args.validate().unwrap().limit, 1);
    }

    #[test]
    fn test_validate_rejects_mixed_directions() {
        let args = PageArgs {
            first: Some(10),
            last: Some(5),
            ..Default::default()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_decodes_cursor() {
        let id = Uuid::new_v4();
        let args = PageArgs {
            first: Some(10),
            after: Some(Cursor::encode(id)),
            ..Default::default()
        };
        assert_eq!(args.validate().unwrap().cursor, Some(id));
    }

    #[test]
    fn test_trim_page() {
        let (rows, has_more) = trim_page((1..=11).collect::<Vec<_>>(), 10);
        assert_eq!(rows.len(), 10);
        assert!(has_more);

        let (rows, has_more) = trim_page(vec![1, 2, 3], 10);
        assert_eq!(rows.len(), 3);
        assert!(!has_more);
    }
}
