use crate::domain::month::CanonicalMonth;
use crate::domain::tweet::Tweet;

/// Vertical band centres of the months present in a set of tweets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MonthBands {
    centers: Vec<(CanonicalMonth, f64)>,
}

impl MonthBands {
    /// Splits `height` into (present months + 1) equal bands; the i-th present
    /// month (canonical order) is centred on band boundary i + 1.
    pub fn from_tweets<'a>(tweets: impl IntoIterator<Item = &'a Tweet>, height: f64) -> Self {
        let present: Vec<CanonicalMonth> = tweets
            .into_iter()
            .filter_map(Tweet::canonical_month)
            .collect();
        let months = CanonicalMonth::present_in(|m| present.contains(&m));

        let spacing = height / (months.len() + 1) as f64;
        let centers = months
            .into_iter()
            .enumerate()
            .map(|(index, month)| (month, (index + 1) as f64 * spacing))
            .collect();

        Self { centers }
    }

    pub fn center(&self, month: CanonicalMonth) -> Option<f64> {
        self.centers
            .iter()
            .find(|(m, _)| *m == month)
            .map(|(_, y)| *y)
    }

    /// Band centre for a tweet, `None` when its month is not plotted.
    pub fn center_for(&self, tweet: &Tweet) -> Option<f64> {
        tweet.canonical_month().and_then(|m| self.center(m))
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalMonth, f64)> + '_ {
        self.centers.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweet_in(month: &str) -> Tweet {
        Tweet {
            month: Some(month.to_string()),
            ..Tweet::default()
        }
    }

    #[test]
    fn test_three_months_split_height_in_quarters() {
        let tweets = vec![tweet_in("May"), tweet_in("March"), tweet_in("April")];
        let bands = MonthBands::from_tweets(&tweets, 500.0);
        let centers: Vec<_> = bands.iter().collect();
        assert_eq!(
            centers,
            vec![
                (CanonicalMonth::March, 125.0),
                (CanonicalMonth::April, 250.0),
                (CanonicalMonth::May, 375.0),
            ]
        );
    }

    #[test]
    fn test_single_month_sits_mid_height() {
        let tweets = vec![tweet_in("April"), tweet_in("April")];
        let bands = MonthBands::from_tweets(&tweets, 500.0);
        assert_eq!(bands.iter().count(), 1);
        assert_eq!(bands.center(CanonicalMonth::April), Some(250.0));
        assert_eq!(bands.center(CanonicalMonth::March), None);
    }

    #[test]
    fn test_unknown_months_get_no_band() {
        let tweets = vec![tweet_in("June"), tweet_in("May"), Tweet::default()];
        let bands = MonthBands::from_tweets(&tweets, 500.0);
        assert_eq!(bands.iter().count(), 1);
        assert_eq!(bands.center_for(&tweets[0]), None);
        assert_eq!(bands.center_for(&tweets[1]), Some(250.0));
        assert_eq!(bands.center_for(&tweets[2]), None);
    }

    #[test]
    fn test_no_tweets_no_bands() {
        let bands = MonthBands::from_tweets(&Vec::<Tweet>::new(), 500.0);
        assert_eq!(bands.iter().count(), 0);
    }
}
