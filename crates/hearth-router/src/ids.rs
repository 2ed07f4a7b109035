/// Validated identifiers and page numbers
///
/// Every type here wraps a `NonZeroU32`, so a value that exists is already in
/// range and builders taking them cannot fail.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UrlError;

macro_rules! positive_id {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(NonZeroU32);

        impl $name {
            pub const MIN: Self = Self(NonZeroU32::MIN);

            /// Validates that `value` is at least 1
            pub fn new(value: i64) -> Result<Self, UrlError> {
                u32::try_from(value)
                    .ok()
                    .and_then(NonZeroU32::new)
                    .map(Self)
                    .ok_or_else(|| {
                        UrlError::invalid($what, format!("must be at least 1, got {}", value))
                    })
            }

            pub const fn get(self) -> u32 {
                self.0.get()
            }
        }

        impl TryFrom<i64> for $name {
            type Error = UrlError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl FromStr for $name {
            type Err = UrlError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: i64 = s
                    .parse()
                    .map_err(|_| UrlError::invalid($what, format!("`{}` is not a number", s)))?;
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

positive_id!(
    /// Project primary key; appears in personal project URLs as `/p/{id}`
    ProjectId,
    "project id"
);
positive_id!(ThreadId, "thread id");
positive_id!(PostId, "post id");
positive_id!(SubforumId, "subforum id");
positive_id!(SnippetId, "snippet id");
positive_id!(TopicId, "library topic id");
positive_id!(ResourceId, "library resource id");
positive_id!(
    /// 1-based page number; page 1 is never written into a URL
    Page,
    "page"
);

impl Page {
    pub const FIRST: Page = Page::MIN;

    pub fn is_first(self) -> bool {
        self == Page::FIRST
    }
}

/// Result of validating a `page` route capture against a list length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: Page,
    pub total_pages: Page,
}

impl PageInfo {
    /// Resolves the page requested by a route capture
    ///
    /// A missing or empty capture means page 1. Returns `None` when the
    /// capture is not a number or lies outside `1..=total_pages`; callers
    /// usually redirect to the first page in that case. An empty list still
    /// has one (empty) page.
    ///
    /// # Examples
    ///
    /// ```
    /// use hearth_router::{Page, PageInfo};
    ///
    /// let info = PageInfo::from_param(Some("3"), 95, 25).unwrap();
    /// assert_eq!(info.page.get(), 3);
    /// assert_eq!(info.total_pages.get(), 4);
    ///
    /// assert!(PageInfo::from_param(Some("5"), 95, 25).is_none());
    /// assert_eq!(PageInfo::from_param(None, 0, 25).unwrap().page, Page::FIRST);
    /// ```
    pub fn from_param(param: Option<&str>, total_items: u64, per_page: u32) -> Option<PageInfo> {
        let per_page = u64::from(per_page.max(1));
        let pages = total_items.div_ceil(per_page).max(1);
        let total_pages = Page::new(i64::try_from(pages).ok()?).ok()?;

        let page = match param.filter(|p| !p.is_empty()) {
            Some(raw) => raw.parse::<Page>().ok()?,
            None => Page::FIRST,
        };

        (page <= total_pages).then_some(PageInfo { page, total_pages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_rejects_zero_and_negative() {
        assert!(ThreadId::new(0).is_err());
        assert!(PostId::new(-1).is_err());
        assert!(Page::new(i64::from(u32::MAX) + 1).is_err());
        assert_eq!(ThreadId::new(42).unwrap().get(), 42);
    }

    #[test]
    fn test_error_names_the_argument() {
        let err = ThreadId::new(0).unwrap_err();
        assert_eq!(err.to_string(), "invalid thread id: must be at least 1, got 0");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("7".parse::<Page>().unwrap().get(), 7);
        assert!("seven".parse::<Page>().is_err());
        assert!("0".parse::<SnippetId>().is_err());
    }

    #[test]
    fn test_deserialize_rejects_zero() {
        assert_eq!(deserialize_project_id(5).unwrap().get(), 5);
        assert!(deserialize_project_id(0).is_err());
    }

    fn deserialize_project_id(value: u32) -> Result<ProjectId, serde::de::value::Error> {
        use serde::de::value::{Error, U32Deserializer};
        use serde::de::IntoDeserializer;
        let de: U32Deserializer<Error> = value.into_deserializer();
        ProjectId::deserialize(de)
    }

    #[rstest]
    #[case(None, 100, 25, Some((1, 4)))]
    #[case(Some(""), 100, 25, Some((1, 4)))]
    #[case(Some("4"), 100, 25, Some((4, 4)))]
    #[case(Some("5"), 100, 25, None)]
    #[case(Some("0"), 100, 25, None)]
    #[case(Some("abc"), 100, 25, None)]
    #[case(None, 0, 25, Some((1, 1)))]
    #[case(Some("2"), 3, 0, Some((2, 3)))]
    fn test_page_info(
        #[case] param: Option<&str>,
        #[case] total: u64,
        #[case] per_page: u32,
        #[case] expected: Option<(u32, u32)>,
    ) {
        let info = PageInfo::from_param(param, total, per_page)
            .map(|info| (info.page.get(), info.total_pages.get()));
        assert_eq!(info, expected);
    }
}
