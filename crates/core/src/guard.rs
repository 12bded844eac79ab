//! Precondition guards for list-valued SDP fields.
//!
//! Several SDP lines carry lists that may legitimately be absent (`r=`
//! offsets, `m=` formats, `a=` attributes) while others must carry at least
//! one entry (a media description without a format is malformed, RFC 4566
//! §5.14). These helpers normalize the former and fail fast on the latter.

use crate::error::{Result, SdpError};

/// Return `items` unchanged, or an empty list of the same element type when
/// absent.
pub fn empty_if_none<T>(items: Option<Vec<T>>) -> Vec<T> {
    items.unwrap_or_default()
}

/// Require a present, non-empty list.
///
/// Returns the same slice on success. Fails with
/// [`SdpError::InvalidArgument`] carrying `msg` when `items` is absent or
/// empty.
pub fn require_items<'a, T>(items: Option<&'a [T]>, msg: &str) -> Result<&'a [T]> {
    match items {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(SdpError::InvalidArgument(msg.to_string())),
    }
}

/// Like [`require_items`], but for lists of optional entries: the leading
/// entry must also be present.
pub fn require_leading_item<'a, T>(
    items: Option<&'a [Option<T>]>,
    msg: &str,
) -> Result<&'a [Option<T>]> {
    match items {
        Some(items @ [Some(_), ..]) => Ok(items),
        _ => Err(SdpError::InvalidArgument(msg.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_if_none_passes_through() {
        assert_eq!(empty_if_none(Some(vec![96u8, 97])), vec![96, 97]);
    }

    #[test]
    fn empty_if_none_allocates_empty() {
        let offsets: Vec<u64> = empty_if_none(None);
        assert!(offsets.is_empty());
    }

    #[test]
    fn require_items_rejects_absent() {
        let err = require_items::<u32>(None, "formats required").unwrap_err();
        assert_eq!(err, SdpError::InvalidArgument("formats required".into()));
    }

    #[test]
    fn require_items_rejects_empty() {
        let err = require_items::<u32>(Some(&[]), "msg").unwrap_err();
        assert_eq!(err.to_string(), "msg");
    }

    #[test]
    fn require_items_returns_same_slice() {
        let formats = [96u32, 97, 98];
        let out = require_items(Some(&formats[..]), "msg").unwrap();
        assert_eq!(out, &[96, 97, 98]);
        assert!(std::ptr::eq(out, &formats[..]));
    }

    #[test]
    fn require_leading_item_rejects_leading_none() {
        let items = [None, Some("H264")];
        let err = require_leading_item(Some(&items[..]), "codec missing").unwrap_err();
        assert_eq!(err, SdpError::InvalidArgument("codec missing".into()));
    }

    #[test]
    fn require_leading_item_accepts_trailing_none() {
        let items = [Some("H264"), None];
        let out = require_leading_item(Some(&items[..]), "msg").unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn require_leading_item_rejects_empty_and_absent() {
        assert!(require_leading_item::<&str>(Some(&[]), "msg").is_err());
        assert!(require_leading_item::<&str>(None, "msg").is_err());
    }
}
