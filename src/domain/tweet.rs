use serde_json::Value;

use crate::domain::month::CanonicalMonth;

/// Stable identity of a record within one loaded file: its position in the array.
/// Selection compares ids, so two records with identical content stay distinct.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct TweetId(pub usize);

/// One record from an uploaded file.
///
/// Every field is optional: a missing or wrongly-typed field is `None` rather
/// than a load error, and extra fields are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tweet {
    pub month: Option<String>,
    pub sentiment: Option<f64>,
    pub subjectivity: Option<f64>,
    pub raw_tweet: Option<String>,
}

impl Tweet {
    /// Lenient field extraction. Non-object values yield an empty record.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        let number = |key: &str| value.get(key).and_then(Value::as_f64);

        Self {
            month: text("Month"),
            sentiment: number("Sentiment"),
            subjectivity: number("Subjectivity"),
            raw_tweet: text("RawTweet"),
        }
    }

    pub fn canonical_month(&self) -> Option<CanonicalMonth> {
        self.month.as_deref().and_then(CanonicalMonth::parse)
    }

    pub fn raw_text(&self) -> &str {
        self.raw_tweet.as_deref().unwrap_or_default()
    }
}

/// The tweets of one successful upload.
///
/// A new upload builds a new dataset with a higher `generation`; nothing is
/// ever mutated in place.
#[derive(Clone, Debug, Default)]
pub struct TweetDataset {
    pub tweets: Vec<Tweet>,
    pub source: String,
    pub generation: u64,
}

impl TweetDataset {
    pub fn new(tweets: Vec<Tweet>, source: impl Into<String>, generation: u64) -> Self {
        Self {
            tweets,
            source: source.into(),
            generation,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tweets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tweets.len()
    }

    pub fn get(&self, id: TweetId) -> Option<&Tweet> {
        self.tweets.get(id.0)
    }

    /// The leading records that are eligible for plotting, with their ids.
    pub fn visible(&self, max_tweets: usize) -> impl Iterator<Item = (TweetId, &Tweet)> {
        self.tweets
            .iter()
            .take(max_tweets)
            .enumerate()
            .map(|(index, tweet)| (TweetId(index), tweet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_reads_known_fields() {
        let value = json!({
            "Month": "April",
            "Sentiment": -0.25,
            "Subjectivity": 0.5,
            "RawTweet": "great day",
            "Likes": 12
        });
        let tweet = Tweet::from_value(&value);
        assert_eq!(tweet.month.as_deref(), Some("April"));
        assert_eq!(tweet.sentiment, Some(-0.25));
        assert_eq!(tweet.subjectivity, Some(0.5));
        assert_eq!(tweet.raw_text(), "great day");
        assert_eq!(tweet.canonical_month(), Some(CanonicalMonth::April));
    }

    #[test]
    fn test_from_value_tolerates_wrong_types() {
        let value = json!({ "Month": 4, "Sentiment": "high" });
        let tweet = Tweet::from_value(&value);
        assert_eq!(tweet, Tweet::default());

        let tweet = Tweet::from_value(&json!("not an object"));
        assert_eq!(tweet, Tweet::default());
        assert_eq!(tweet.raw_text(), "");
    }

    #[test]
    fn test_null_and_numeric_strings_are_not_scores() {
        let tweet = Tweet::from_value(&json!({ "Sentiment": null, "Subjectivity": "0.5" }));
        assert_eq!(tweet.sentiment, None);
        assert_eq!(tweet.subjectivity, None);
    }

    #[test]
    fn test_visible_truncates_and_numbers_from_zero() {
        let tweets = vec![Tweet::default(); 5];
        let dataset = TweetDataset::new(tweets, "five.json", 1);
        let ids: Vec<TweetId> = dataset.visible(3).map(|(id, _)| id).collect();
        assert_eq!(ids, vec![TweetId(0), TweetId(1), TweetId(2)]);
    }
}
