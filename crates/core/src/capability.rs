// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capability identifiers and the capability groups the matrix is built from
//!
//! A capability names one operation within a job type's repertoire. The same
//! identifier may mean different things under different job types; legality
//! is decided by [`CapabilityMatrix`](crate::CapabilityMatrix), not here.

use crate::error::CapabilityError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A specific operation a job can request
///
/// Declaration order is the canonical listing order used by the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    Scraper,
    Telemetry,
    Transcription,
    SearchByQuery,
    SearchByTrending,
    /// Elevated Twitter API capability
    SearchByFullArchive,
    SearchByProfile,
    GetById,
    GetReplies,
    GetRetweeters,
    GetTweets,
    GetMedia,
    GetHomeTweets,
    GetForYouTweets,
    GetProfileById,
    GetTrends,
    GetFollowing,
    GetFollowers,
    GetSpace,
    /// LinkedIn profile lookup
    GetProfile,
    ScrapeUrls,
    SearchPosts,
    SearchUsers,
    SearchCommunities,
}

impl Capability {
    pub const ALL: [Capability; 24] = [
        Capability::Scraper,
        Capability::Telemetry,
        Capability::Transcription,
        Capability::SearchByQuery,
        Capability::SearchByTrending,
        Capability::SearchByFullArchive,
        Capability::SearchByProfile,
        Capability::GetById,
        Capability::GetReplies,
        Capability::GetRetweeters,
        Capability::GetTweets,
        Capability::GetMedia,
        Capability::GetHomeTweets,
        Capability::GetForYouTweets,
        Capability::GetProfileById,
        Capability::GetTrends,
        Capability::GetFollowing,
        Capability::GetFollowers,
        Capability::GetSpace,
        Capability::GetProfile,
        Capability::ScrapeUrls,
        Capability::SearchPosts,
        Capability::SearchUsers,
        Capability::SearchCommunities,
    ];

    /// Wire name of this capability
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Scraper => "scraper",
            Capability::Telemetry => "telemetry",
            Capability::Transcription => "transcription",
            Capability::SearchByQuery => "searchbyquery",
            Capability::SearchByTrending => "searchbytrending",
            Capability::SearchByFullArchive => "searchbyfullarchive",
            Capability::SearchByProfile => "searchbyprofile",
            Capability::GetById => "getbyid",
            Capability::GetReplies => "getreplies",
            Capability::GetRetweeters => "getretweeters",
            Capability::GetTweets => "gettweets",
            Capability::GetMedia => "getmedia",
            Capability::GetHomeTweets => "gethometweets",
            Capability::GetForYouTweets => "getforyoutweets",
            Capability::GetProfileById => "getprofilebyid",
            Capability::GetTrends => "gettrends",
            Capability::GetFollowing => "getfollowing",
            Capability::GetFollowers => "getfollowers",
            Capability::GetSpace => "getspace",
            Capability::GetProfile => "getprofile",
            Capability::ScrapeUrls => "scrapeurls",
            Capability::SearchPosts => "searchposts",
            Capability::SearchUsers => "searchusers",
            Capability::SearchCommunities => "searchcommunities",
        }
    }

    /// Parse an optional wire value, treating the empty string as "no capability"
    pub fn parse_optional(s: &str) -> Result<Option<Capability>, CapabilityError> {
        if s.is_empty() {
            Ok(None)
        } else {
            s.parse().map(Some)
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Capability {
    type Err = CapabilityError;

    /// Parsing is case-insensitive; wire names are lower case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Capability::ALL
            .into_iter()
            .find(|cap| cap.as_str() == lowered)
            .ok_or_else(|| CapabilityError::UnknownCapability(s.to_string()))
    }
}

impl Serialize for Capability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Twitter capabilities available with credential-based auth
pub const TWITTER_CREDENTIAL_CAPS: &[Capability] = &[
    Capability::SearchByQuery,
    Capability::SearchByProfile,
    Capability::GetById,
    Capability::GetReplies,
    Capability::GetRetweeters,
    Capability::GetTweets,
    Capability::GetMedia,
    Capability::GetHomeTweets,
    Capability::GetForYouTweets,
    Capability::GetProfileById,
    Capability::GetTrends,
    Capability::GetFollowing,
    Capability::GetFollowers,
    Capability::GetSpace,
];

/// Basic Twitter capabilities available with API keys
pub const TWITTER_API_CAPS: &[Capability] = &[
    Capability::SearchByQuery,
    Capability::GetById,
    Capability::GetProfileById,
];

/// Twitter capabilities available through Apify
pub const TWITTER_APIFY_CAPS: &[Capability] = &[Capability::GetFollowers, Capability::GetFollowing];

/// Capabilities that need an elevated Twitter API key
pub const TWITTER_ELEVATED_CAPS: &[Capability] = &[Capability::SearchByFullArchive];

pub const WEB_CAPS: &[Capability] = &[Capability::Scraper];

pub const TELEMETRY_CAPS: &[Capability] = &[Capability::Telemetry];

pub const TIKTOK_CAPS: &[Capability] = &[
    Capability::Transcription,
    Capability::SearchByQuery,
    Capability::SearchByTrending,
];

pub const LINKEDIN_CAPS: &[Capability] = &[Capability::SearchByQuery, Capability::GetProfile];

pub const REDDIT_CAPS: &[Capability] = &[
    Capability::ScrapeUrls,
    Capability::SearchPosts,
    Capability::SearchUsers,
    Capability::SearchCommunities,
];

#[cfg(test)]
#[path = "capability_tests.rs"]
mod tests;
