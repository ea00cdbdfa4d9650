//! Common regex patterns for resume extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Two date-like runs around a spaced hyphen, en dash or em dash: "Jan 2020 - Present"
    pub static ref DATE_RANGE: Regex = Regex::new(
        r"([A-Za-z0-9 ,./-]{4,})\s[-–—]\s([A-Za-z0-9 ,./-]{4,})"
    ).unwrap();

    // Fallback phrase, matched against lower-cased text: "3.5 years"
    pub static ref STATED_YEARS: Regex = Regex::new(
        r"([0-9]+(?:\.[0-9]+)?)\s+years"
    ).unwrap();

    // Numeric dates: MM/DD/YYYY, DD.MM.YYYY
    pub static ref DATE_NUMERIC_FULL: Regex = Regex::new(
        r"\b([0-9]{1,2})[-/.]([0-9]{1,2})[-/.]([0-9]{4})\b"
    ).unwrap();

    // ISO-like: 2019-03, 2019/03/15
    pub static ref DATE_YEAR_MONTH: Regex = Regex::new(
        r"\b([0-9]{4})[-/.]([0-9]{1,2})(?:[-/.]([0-9]{1,2}))?\b"
    ).unwrap();

    // Month first: 03/2019
    pub static ref DATE_MONTH_YEAR: Regex = Regex::new(
        r"\b([0-9]{1,2})[-/.]([0-9]{4})\b"
    ).unwrap();

    // Month names: "March 2021", "Jan. 15, 2020", "Sept '19"
    pub static ref DATE_MONTH_NAME: Regex = Regex::new(
        r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec)\.?,?\s*(?:([0-9]{1,2})(?:st|nd|rd|th)?,?\s+)?([0-9]{4}|'[0-9]{2})\b"
    ).unwrap();

    // Bare year: 2018
    pub static ref DATE_YEAR: Regex = Regex::new(
        r"\b(19[0-9]{2}|20[0-9]{2})\b"
    ).unwrap();

    // Email pattern
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9+_.-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Phone pattern: optional +, 8+ characters of digits and separators, digit at both ends
    pub static ref PHONE: Regex = Regex::new(
        r"\+?[0-9][0-9\s\-().]{6,}[0-9]"
    ).unwrap();
}
