use std::fmt;

use chrono::NaiveDate;

/// Display format of `Post::date_posted`, e.g. `Feb 10, 2026`.
pub const DATE_FORMAT: &str = "%b %d, %Y";

/// Identifier of a post. Positive, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostId(u64);

impl PostId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Id following this one, or `None` on overflow.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl TryFrom<i128> for PostId {
    type Error = i128;

    /// Only positive integers that fit in `u64` name a post.
    fn try_from(value: i128) -> Result<Self, Self::Error> {
        match u64::try_from(value) {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(value),
        }
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post entity - a blog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub author: String,
    pub title: String,
    pub content: String,
    /// Display string, not a real date.
    pub date_posted: String,
}

impl Post {
    /// Short form of the title used as the detail page `<title>`.
    ///
    /// Counts characters, not bytes.
    pub fn page_title(&self) -> String {
        self.title.chars().take(10).collect()
    }
}

/// The author-supplied part of a post; the store assigns the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub author: String,
    pub title: String,
    pub content: String,
}

impl NewPost {
    /// Attach the store-assigned fields.
    pub fn into_post(self, id: PostId, date_posted: String) -> Post {
        Post {
            id,
            author: self.author,
            title: self.title,
            content: self.content,
            date_posted,
        }
    }
}

/// Render a date the way posts display it.
pub fn format_post_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_titled(title: &str) -> Post {
        NewPost {
            author: "Elon Musk".to_string(),
            title: title.to_string(),
            content: "body".to_string(),
        }
        .into_post(PostId::new(1), "Feb 09, 2026".to_string())
    }

    #[test]
    fn test_page_title_truncates_to_ten_chars() {
        assert_eq!(post_titled("FastAPI is Awesome").page_title(), "FastAPI is");
    }

    #[test]
    fn test_page_title_keeps_short_titles() {
        assert_eq!(post_titled("Hi").page_title(), "Hi");
    }

    #[test]
    fn test_page_title_counts_chars_not_bytes() {
        assert_eq!(post_titled("Ünïcödé tïtlë").page_title(), "Ünïcödé tï");
    }

    #[test]
    fn test_format_post_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();
        assert_eq!(format_post_date(date), "Feb 09, 2026");
    }

    #[test]
    fn test_post_id_from_integer() {
        assert_eq!(PostId::try_from(3), Ok(PostId::new(3)));
        assert_eq!(PostId::try_from(0), Err(0));
        assert_eq!(PostId::try_from(-4), Err(-4));
        assert_eq!(
            PostId::try_from(i128::from(u64::MAX)),
            Ok(PostId::new(u64::MAX))
        );

        let past_u64 = i128::from(u64::MAX) + 1;
        assert_eq!(PostId::try_from(past_u64), Err(past_u64));
    }

    #[test]
    fn test_post_id_next_overflow() {
        assert_eq!(PostId::new(1).next(), Some(PostId::new(2)));
        assert_eq!(PostId::new(u64::MAX).next(), None);
    }
}
