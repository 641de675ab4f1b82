/*!
Support for "printf" style formatting of date and time values.

The formatting routines in this crate closely resemble the POSIX
[`strftime`] function, but they do none of the calendar work themselves.
The caller supplies a fully resolved [`BrokenDownTime`] — year, month, day,
clock fields, weekday and time zone — and this crate renders it through a
template of percent-prefixed directives. Obtaining the current time,
parsing text back into a timestamp and computing things like weekdays or
leap years are all jobs for a datetime library; this crate only does the
final step of turning resolved fields into text.

There is no failure channel anywhere. Every template, however malformed,
produces some deterministic output: a trailing `%` is a literal `%`, an
unrecognized directive is reproduced exactly as written and extreme values
(say, a ten digit year) are printed in full rather than truncated. See
[`format`] for examples.

# Example

```
use timefmt::{BrokenDownTime, Weekday};

let mut tm = BrokenDownTime::default();
tm.set_year(2024);
tm.set_month(7);
tm.set_day(15);
tm.set_weekday(Weekday::Monday);
assert_eq!(tm.format("%a, %Y-%m-%d"), "Mon, 2024-07-15");
```

# Conversion specifications

This table lists the complete set of conversion specifiers supported when
formatting.

| Specifier | Example | Description |
| --------- | ------- | ----------- |
| `%%` | `%` | A literal `%`. |
| `%A`, `%a` | `Sunday`, `Sun` | The full and abbreviated weekday name, respectively. |
| `%B`, `%b`, `%h` | `June`, `Jun`, `Jun` | The full and abbreviated month name, respectively. |
| `%c` | `Sun Jul 14 16:24:59 2024` | Equivalent to `%a %b %e %H:%M:%S %Y`. |
| `%+` | `Sun Jul 14 16:24:59 UTC 2024` | Equivalent to `%a %b %e %H:%M:%S %Z %Y`. |
| `%D`, `%x` | `7/14/24` | Equivalent to `%m/%d/%y`. |
| `%d`, `%e` | `05`, ` 5` | The day of the month. `%d` is zero padded, `%e` is space padded. |
| `%F` | `2024-07-14` | Equivalent to `%Y-%m-%d`. |
| `%H` | `23` | The hour in a 24 hour clock. Zero padded. |
| `%I` | `11` | The hour in a 12 hour clock. Zero padded. |
| `%M` | `04` | The minute. Zero padded. |
| `%m` | `01` | The month. Zero padded. |
| `%n` | | A newline. |
| `%P` | `am` | Whether the time is in the AM or PM, lowercase. |
| `%p` | `PM` | Whether the time is in the AM or PM, uppercase. |
| `%R` | `23:30` | Equivalent to `%H:%M`. |
| `%r` | `11:30:59 PM` | Equivalent to `%I:%M:%S %p`. |
| `%S` | `59` | The second. Zero padded. |
| `%T`, `%X` | `23:30:59` | Equivalent to `%H:%M:%S`. |
| `%t` | | A tab. |
| `%v` | `14-Jul-2024` | Equivalent to `%e-%b-%Y`. |
| `%Y` | `2024` | The full year. Zero padded to 4 digits. |
| `%y` | `24` | The last two digits of the year. Zero padded. |
| `%Z` | `EDT` | The time zone abbreviation, as supplied by the caller. |
| `%z` | `+0530` | The UTC offset as `[+-]HHMM[SS]`. Unaffected by flags. |

Any other specifier is not an error. It is reproduced literally, exactly as
it appears in the template:

```
use timefmt::BrokenDownTime;

let tm = BrokenDownTime::default();
assert_eq!(tm.format("%J"), "%J");
```

# Flags

The following flags can be inserted immediately after the `%` and before
the directive:

* `-` - Do not pad at all.
* `_` - Pad to the left with spaces.
* `0` - Pad to the left with zeros.
* `^` - Use alphabetic uppercase for all relevant strings.
* `#` - Swap the case of the result string. This is typically only useful
with `%p` or `%Z`, since they are the only specifiers that emit strings
entirely in uppercase by default.

Moreover, a decimal number after the (possibly absent) flag sets the
minimum width of the result. Padding widens output but never narrows it: a
value whose natural length meets or exceeds the width is emitted in full.

Directives that stand for a fixed sequence of other directives, like `%F`
or `%T`, render each member of the sequence with that member's own default
width and padding. Flags on the composed directive itself do not propagate:
`%-F` and `%F` produce the same output.

```
use timefmt::BrokenDownTime;

let mut tm = BrokenDownTime::default();
tm.set_year(5);
assert_eq!(tm.format("%Y"), "0005");
assert_eq!(tm.format("%-Y"), "5");
assert_eq!(tm.format("%_Y"), "   5");
```

[`strftime`]: https://pubs.opengroup.org/onlinepubs/009695399/functions/strftime.html
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

#[cfg(test)]
extern crate std;

use alloc::{string::String, vec::Vec};

use crate::format::Formatter;

#[macro_use]
mod logging;

mod format;
mod util;

/// Formats `tm` according to `template` and returns a newly allocated
/// string.
///
/// This is a convenience for [`BrokenDownTime::format`]. Formatting cannot
/// fail: unrecognized directives and out of range values all render to
/// something deterministic rather than reporting an error.
///
/// # Example
///
/// ```
/// use timefmt::BrokenDownTime;
///
/// let mut tm = BrokenDownTime::default();
/// tm.set_year(2024);
/// tm.set_month(11);
/// tm.set_day(5);
/// assert_eq!(timefmt::format(&tm, "%Y-%m-%d"), "2024-11-05");
/// assert_eq!(timefmt::format(&tm, "%m/%d at 100%%"), "11/05 at 100%");
/// ```
pub fn format(tm: &BrokenDownTime, template: impl AsRef<[u8]>) -> String {
    tm.format(template)
}

/// Appends the formatted time to `buf` and returns the (possibly
/// reallocated) buffer.
///
/// Use this instead of [`format`] to reuse one allocation across repeated
/// calls.
///
/// # Example
///
/// ```
/// use timefmt::BrokenDownTime;
///
/// let mut tm = BrokenDownTime::default();
/// tm.set_year(2024);
///
/// let mut buf = Vec::with_capacity(64);
/// buf = timefmt::append_format(buf, &tm, "%Y");
/// buf = timefmt::append_format(buf, &tm, " again: %Y");
/// assert_eq!(buf, b"2024 again: 2024");
/// ```
pub fn append_format(
    buf: Vec<u8>,
    tm: &BrokenDownTime,
    template: impl AsRef<[u8]>,
) -> Vec<u8> {
    tm.append_format(buf, template)
}

/// The "broken down time" that formatting reads from.
///
/// This is the moral equivalent of libc's `struct tm`: a calendar instant
/// that has already been fully resolved by the caller, including the
/// weekday and the time zone. Formatting never does calendar arithmetic,
/// so nothing checks that the weekday actually matches the date or that
/// the day exists in the month. Whatever is stored is what renders.
///
/// There is no failure channel. Setters clamp out of range values to the
/// documented range instead of erroring, which keeps every subsequent
/// format call total. The year is the one field that accepts any value.
///
/// The default value is the Unix epoch: 1970-01-01 00:00:00, a Thursday,
/// in UTC.
///
/// # Example
///
/// ```
/// use timefmt::BrokenDownTime;
///
/// let mut tm = BrokenDownTime::default();
/// tm.set_hour(17);
/// tm.set_minute(30);
/// assert_eq!(tm.format("%-I:%M%P"), "5:30pm");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BrokenDownTime {
    year: i64,
    month: i8,
    day: i8,
    hour: i8,
    minute: i8,
    second: i8,
    weekday: Weekday,
    offset: i32,
    tzabbrev: String,
}

impl BrokenDownTime {
    /// Formats this time according to `template` and returns a newly
    /// allocated string.
    ///
    /// Output is produced byte by byte, and in one corner it may not be
    /// valid UTF-8: the `^` and `#` case folds operate on raw bytes and can
    /// damage multibyte sequences in a caller supplied time zone
    /// abbreviation. When that happens, the damaged bytes are replaced with
    /// `U+FFFD`. Use [`BrokenDownTime::append_format`] to get the raw
    /// bytes instead.
    ///
    /// # Example
    ///
    /// ```
    /// use timefmt::BrokenDownTime;
    ///
    /// let mut tm = BrokenDownTime::default();
    /// tm.set_year(2024);
    /// tm.set_month(7);
    /// tm.set_day(9);
    /// assert_eq!(tm.format("%F"), "2024-07-09");
    /// ```
    pub fn format(&self, template: impl AsRef<[u8]>) -> String {
        let buf = self.append_format(Vec::with_capacity(64), template);
        match String::from_utf8(buf) {
            Ok(string) => string,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }

    /// Appends the formatted time to `buf` and returns the (possibly
    /// reallocated) buffer.
    ///
    /// The buffer only ever grows. Nothing written before the call is
    /// touched, and a single call appends its output in one left to right
    /// pass over the template.
    pub fn append_format(
        &self,
        mut buf: Vec<u8>,
        template: impl AsRef<[u8]>,
    ) -> Vec<u8> {
        let mut formatter = Formatter {
            fmt: template.as_ref(),
            pos: 0,
            tm: self,
            wtr: &mut buf,
        };
        formatter.format();
        buf
    }

    /// Returns an adapter that formats this time via [`core::fmt::Display`].
    ///
    /// The template is borrowed, and nothing is rendered until the adapter
    /// is actually displayed.
    ///
    /// # Example
    ///
    /// ```
    /// use timefmt::BrokenDownTime;
    ///
    /// let mut tm = BrokenDownTime::default();
    /// tm.set_year(2024);
    /// tm.set_month(7);
    /// tm.set_day(15);
    /// let string = format!("the date is: {}", tm.display("%-m/%-d/%-Y"));
    /// assert_eq!(string, "the date is: 7/15/2024");
    /// ```
    pub fn display<'t, 'f>(&'t self, template: &'f str) -> Display<'t, 'f> {
        Display { fmt: template, tm: self }
    }

    /// Returns the year.
    pub fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month, in `1..=12`.
    pub fn month(&self) -> i8 {
        self.month
    }

    /// Returns the day of the month, in `1..=31`.
    pub fn day(&self) -> i8 {
        self.day
    }

    /// Returns the hour, in `0..=23`.
    pub fn hour(&self) -> i8 {
        self.hour
    }

    /// Returns the minute, in `0..=59`.
    pub fn minute(&self) -> i8 {
        self.minute
    }

    /// Returns the second, in `0..=60`. `60` accommodates leap seconds.
    pub fn second(&self) -> i8 {
        self.second
    }

    /// Returns the weekday.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the UTC offset in seconds.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Returns the time zone abbreviation, e.g. `EDT`.
    pub fn tz_abbreviation(&self) -> &str {
        &self.tzabbrev
    }

    /// Sets the year. Any value is accepted; formatting never truncates,
    /// so a ten digit year renders with ten digits.
    pub fn set_year(&mut self, year: i64) {
        self.year = year;
    }

    /// Sets the month, clamped to `1..=12`.
    pub fn set_month(&mut self, month: i8) {
        self.month = month.clamp(1, 12);
    }

    /// Sets the day of the month, clamped to `1..=31`.
    pub fn set_day(&mut self, day: i8) {
        self.day = day.clamp(1, 31);
    }

    /// Sets the hour, clamped to `0..=23`.
    pub fn set_hour(&mut self, hour: i8) {
        self.hour = hour.clamp(0, 23);
    }

    /// Sets the minute, clamped to `0..=59`.
    pub fn set_minute(&mut self, minute: i8) {
        self.minute = minute.clamp(0, 59);
    }

    /// Sets the second, clamped to `0..=60` to allow for leap seconds.
    pub fn set_second(&mut self, second: i8) {
        self.second = second.clamp(0, 60);
    }

    /// Sets the weekday.
    ///
    /// Nothing checks that the weekday is consistent with the date fields.
    /// Callers that got their fields from a datetime library will have a
    /// correct one; callers that didn't get whatever they stored.
    pub fn set_weekday(&mut self, weekday: Weekday) {
        self.weekday = weekday;
    }

    /// Sets the UTC offset, in seconds.
    pub fn set_offset(&mut self, offset: i32) {
        self.offset = offset;
    }

    /// Sets the time zone abbreviation rendered by `%Z`.
    pub fn set_tz_abbreviation(&mut self, abbrev: impl Into<String>) {
        self.tzabbrev = abbrev.into();
    }
}

impl Default for BrokenDownTime {
    fn default() -> BrokenDownTime {
        BrokenDownTime {
            year: 1970,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            weekday: Weekday::Thursday,
            offset: 0,
            tzabbrev: String::from("UTC"),
        }
    }
}

/// A "lazy" implementation of `core::fmt::Display` for a formatted time.
///
/// Values of this type are created by [`BrokenDownTime::display`]. The
/// template and the time are captured by reference and the actual
/// formatting happens when the value is displayed.
#[derive(Clone, Copy, Debug)]
pub struct Display<'t, 'f> {
    fmt: &'f str,
    tm: &'t BrokenDownTime,
}

impl core::fmt::Display for Display<'_, '_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.tm.format(self.fmt))
    }
}

/// A day of the week.
///
/// Formatting only ever reads this through the weekday name tables, so the
/// conversion routines exist for callers whose source of truth is a
/// Sunday-based number, like `struct tm`'s `tm_wday`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Weekday {
    /// Sunday.
    Sunday,
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
}

impl Weekday {
    /// Converts a Sunday-based weekday number to a `Weekday`, where `0` is
    /// Sunday and `6` is Saturday.
    ///
    /// The number is taken modulo 7, so every input maps to some weekday.
    ///
    /// # Example
    ///
    /// ```
    /// use timefmt::Weekday;
    ///
    /// assert_eq!(Weekday::from_sunday_zero_offset(0), Weekday::Sunday);
    /// assert_eq!(Weekday::from_sunday_zero_offset(4), Weekday::Thursday);
    /// assert_eq!(Weekday::from_sunday_zero_offset(-1), Weekday::Saturday);
    /// ```
    pub fn from_sunday_zero_offset(number: i8) -> Weekday {
        match number.rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }

    /// Returns this weekday as a Sunday-based number, where Sunday is `0`.
    pub fn to_sunday_zero_offset(self) -> i8 {
        self as i8
    }
}

static LONG_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static SHORT_MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct",
    "Nov", "Dec",
];

static LONG_WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

static SHORT_WEEKDAY_NAMES: [&str; 7] =
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Returns the "full" month name. The month is in `1..=12`, which the
/// clamping setter guarantees.
pub(crate) fn month_name_full(month: i8) -> &'static str {
    LONG_MONTH_NAMES[month as usize - 1]
}

/// Returns the abbreviated month name.
pub(crate) fn month_name_abbrev(month: i8) -> &'static str {
    SHORT_MONTH_NAMES[month as usize - 1]
}

/// Returns the "full" weekday name.
pub(crate) fn weekday_name_full(weekday: Weekday) -> &'static str {
    LONG_WEEKDAY_NAMES[weekday as usize]
}

/// Returns the abbreviated weekday name.
pub(crate) fn weekday_name_abbrev(weekday: Weekday) -> &'static str {
    SHORT_WEEKDAY_NAMES[weekday as usize]
}
