use alloc::vec::Vec;

/// A simple formatter for converting `i64` values to ASCII byte strings.
///
/// This avoids going through the standard library's formatting machinery,
/// which seems to substantially slow things down.
///
/// It also pads the way the template language needs it: the minimum width
/// covers the sign, and padding bytes go in front of the sign. So `-1`
/// padded with zeros to a width of `4` is `00-1`, not `-001`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DecimalFormatter {
    minimum_width: u8,
    padding_byte: u8,
}

impl DecimalFormatter {
    /// Creates a new decimal formatter using the default configuration.
    pub(crate) const fn new() -> DecimalFormatter {
        DecimalFormatter { minimum_width: 0, padding_byte: b'0' }
    }

    /// Format the given value using this configuration as a decimal ASCII
    /// number.
    pub(crate) const fn format(&self, value: i64) -> Decimal {
        Decimal::new(self, value)
    }

    /// The minimum number of bytes, sign included, that the formatted number
    /// should occupy. If the number would be shorter than this, then it is
    /// padded out with the padding byte until the minimum is reached.
    ///
    /// The minimum width is capped at the maximum length of an `i64` value.
    pub(crate) const fn width(self, mut width: u8) -> DecimalFormatter {
        if width > Decimal::MAX_I64_LEN {
            width = Decimal::MAX_I64_LEN;
        }
        DecimalFormatter { minimum_width: width, ..self }
    }

    /// The padding byte to use when `width` is set.
    ///
    /// The default is `0`.
    pub(crate) const fn padding_byte(self, byte: u8) -> DecimalFormatter {
        DecimalFormatter { padding_byte: byte, ..self }
    }
}

impl Default for DecimalFormatter {
    fn default() -> DecimalFormatter {
        DecimalFormatter::new()
    }
}

/// A formatted decimal number that can be converted to a sequence of bytes.
#[derive(Debug)]
pub(crate) struct Decimal {
    buf: [u8; Self::MAX_I64_LEN as usize],
    start: u8,
    end: u8,
}

impl Decimal {
    /// Discovered via `i64::MIN.to_string().len()`.
    pub(crate) const MAX_I64_LEN: u8 = 20;

    /// Using the given formatter, turn the value given into a decimal
    /// representation using ASCII bytes.
    pub(crate) const fn new(
        formatter: &DecimalFormatter,
        value: i64,
    ) -> Decimal {
        let negative = value < 0;
        let Some(mut value) = value.checked_abs() else {
            let buf = [
                b'-', b'9', b'2', b'2', b'3', b'3', b'7', b'2', b'0', b'3',
                b'6', b'8', b'5', b'4', b'7', b'7', b'5', b'8', b'0', b'8',
            ];
            return Decimal { buf, start: 0, end: Self::MAX_I64_LEN };
        };
        let mut decimal = Decimal {
            buf: [0; Self::MAX_I64_LEN as usize],
            start: Self::MAX_I64_LEN,
            end: Self::MAX_I64_LEN,
        };
        loop {
            decimal.start -= 1;

            let digit = (value % 10) as u8;
            value /= 10;
            decimal.buf[decimal.start as usize] = b'0' + digit;
            if value == 0 {
                break;
            }
        }
        if negative {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'-';
        }
        while decimal.len() < formatter.minimum_width {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = formatter.padding_byte;
        }
        decimal
    }

    /// Returns the total number of ASCII bytes (including the sign and any
    /// padding) that are used to represent this decimal number.
    const fn len(&self) -> u8 {
        self.end - self.start
    }

    /// Returns the ASCII representation of this decimal as a byte slice.
    ///
    /// The slice returned is guaranteed to be valid ASCII.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[usize::from(self.start)..usize::from(self.end)]
    }

    /// Writes the ASCII representation of this decimal to the buffer.
    pub(crate) fn push_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.as_bytes());
    }
}
