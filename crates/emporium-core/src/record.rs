//! # Record Codec
//!
//! Flat text encoding of commodities, one field per line.
//!
//! ## Per-Variant Field Order
//! ```text
//! ┌───────────────┬──────────────────────────────────────────────────────────┐
//! │ Audio         │ name, price, low, high, sensitivity, impedance, desc     │
//! │ Smartphone    │ price, name, screen, cellular, camera, chip, weight,     │
//! │               │ video, desc                                              │
//! │ Laptop        │ price, name, screen, os, memory, cpu, rgb, gpu, disk,    │
//! │               │ desc                                                     │
//! └───────────────┴──────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no header, no record count and no separator. A reader must know
//! which variant a stream holds, and the stream ends when the lines run out.
//! The laptop RGB flag is stored as `1` (yes) or `2` (no).
//!
//! Text fields are written verbatim, so they must not contain line breaks.
//! Everything typed at the console is read one line at a time, which keeps
//! that true.

use crate::commodity::{AudioSpec, Commodity, LaptopSpec, SmartphoneSpec, Specs, Variant};
use crate::error::RecordError;
use crate::money::Money;

/// Result type for decoding.
pub type RecordResult<T> = Result<T, RecordError>;

// =============================================================================
// Encoding
// =============================================================================

/// Encodes one commodity as newline-terminated fields.
pub fn encode(commodity: &Commodity) -> String {
    let name = commodity.name();
    let price = commodity.price();
    let description = commodity.description();

    let fields: Vec<String> = match commodity.specs() {
        Specs::Audio(spec) => vec![
            name.to_string(),
            price.to_string(),
            spec.low_freq_hz.to_string(),
            spec.high_freq_khz.to_string(),
            spec.sensitivity_db.to_string(),
            spec.impedance_ohm.to_string(),
            description.to_string(),
        ],
        Specs::Smartphone(spec) => vec![
            price.to_string(),
            name.to_string(),
            spec.screen_inch.to_string(),
            spec.cellular.clone(),
            spec.camera_px.to_string(),
            spec.chip.clone(),
            spec.weight_g.to_string(),
            spec.video_playback_hours.to_string(),
            description.to_string(),
        ],
        Specs::Laptop(spec) => vec![
            price.to_string(),
            name.to_string(),
            spec.screen_inch.to_string(),
            spec.os.clone(),
            spec.max_memory_gb.to_string(),
            spec.cpu.clone(),
            encode_flag(spec.has_rgb).to_string(),
            spec.gpu.clone(),
            spec.disk_gb.to_string(),
            description.to_string(),
        ],
    };

    let mut out = fields.join("\n");
    out.push('\n');
    out
}

/// Encodes a whole partition in order.
pub fn encode_all<'a>(commodities: impl IntoIterator<Item = &'a Commodity>) -> String {
    commodities.into_iter().map(encode).collect()
}

fn encode_flag(value: bool) -> u8 {
    if value {
        1
    } else {
        2
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decodes the next record of `variant` from a line iterator.
///
/// ## Returns
/// * `Ok(Some(commodity))` - a complete record was read
/// * `Ok(None)` - the lines were exhausted before the record began
/// * `Err(RecordError)` - the record is truncated or malformed
pub fn decode<'a, I>(variant: Variant, lines: &mut I) -> RecordResult<Option<Commodity>>
where
    I: Iterator<Item = &'a str>,
{
    let mut fields = Fields { variant, lines };

    let commodity = match variant {
        Variant::Audio => {
            let Some(name) = fields.first()? else {
                return Ok(None);
            };
            let price = fields.price()?;
            let spec = AudioSpec {
                low_freq_hz: fields.number("low_freq")?,
                high_freq_khz: fields.number("high_freq")?,
                sensitivity_db: fields.number("sensitivity")?,
                impedance_ohm: fields.number("impedance")?,
            };
            let description = fields.text("description")?;
            Commodity::audio(name, price, description, spec)
        }
        Variant::Smartphone => {
            let Some(raw_price) = fields.first()? else {
                return Ok(None);
            };
            let price = fields.parse_price(&raw_price)?;
            let name = fields.name()?;
            let spec = SmartphoneSpec {
                screen_inch: fields.number("screen")?,
                cellular: fields.text("cellular")?,
                camera_px: fields.number("camera")?,
                chip: fields.text("chip")?,
                weight_g: fields.number("weight")?,
                video_playback_hours: fields.number("video_playback")?,
            };
            let description = fields.text("description")?;
            Commodity::smartphone(name, price, description, spec)
        }
        Variant::Laptop => {
            let Some(raw_price) = fields.first()? else {
                return Ok(None);
            };
            let price = fields.parse_price(&raw_price)?;
            let name = fields.name()?;
            let screen_inch = fields.number("screen")?;
            let os = fields.text("os")?;
            let max_memory_gb = fields.number("max_memory")?;
            let cpu = fields.text("cpu")?;
            let has_rgb = fields.flag("rgb")?;
            let gpu = fields.text("gpu")?;
            let disk_gb = fields.number("disk")?;
            let description = fields.text("description")?;
            Commodity::laptop(
                name,
                price,
                description,
                LaptopSpec {
                    screen_inch,
                    os,
                    cpu,
                    gpu,
                    max_memory_gb,
                    disk_gb,
                    has_rgb,
                },
            )
        }
    };

    Ok(Some(commodity))
}

/// Outcome of decoding a whole partition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedPartition {
    /// Every record read before the stream ended or broke.
    pub commodities: Vec<Commodity>,
    /// Why decoding stopped early, if it did.
    pub stopped_by: Option<RecordError>,
}

/// Decodes records until the text runs out or a record fails.
///
/// A failing record ends the partition: whatever was read before it is
/// kept, and nothing after it is attempted.
pub fn decode_all(variant: Variant, text: &str) -> DecodedPartition {
    let mut lines = text.lines();
    let mut commodities = Vec::new();

    loop {
        match decode(variant, &mut lines) {
            Ok(Some(commodity)) => commodities.push(commodity),
            Ok(None) => {
                return DecodedPartition {
                    commodities,
                    stopped_by: None,
                }
            }
            Err(err) => {
                return DecodedPartition {
                    commodities,
                    stopped_by: Some(err),
                }
            }
        }
    }
}

struct Fields<'l, I> {
    variant: Variant,
    lines: &'l mut I,
}

impl<'a, I> Fields<'_, I>
where
    I: Iterator<Item = &'a str>,
{
    /// The first line of a record; `None` means a clean end of stream.
    fn first(&mut self) -> RecordResult<Option<String>> {
        match self.lines.next() {
            None => Ok(None),
            Some(line) if self.variant == Variant::Audio => {
                Ok(Some(self.check_name(line)?))
            }
            Some(line) => Ok(Some(line.to_string())),
        }
    }

    fn text(&mut self, field: &'static str) -> RecordResult<String> {
        self.lines
            .next()
            .map(str::to_string)
            .ok_or(RecordError::Truncated {
                variant: self.variant,
                field,
            })
    }

    fn name(&mut self) -> RecordResult<String> {
        let line = self.text("name")?;
        self.check_name(&line)
    }

    fn check_name(&self, line: &str) -> RecordResult<String> {
        if line.trim().is_empty() {
            return Err(RecordError::EmptyName {
                variant: self.variant,
            });
        }
        Ok(line.to_string())
    }

    fn number(&mut self, field: &'static str) -> RecordResult<u32> {
        let raw = self.text(field)?;
        self.parse_number(field, &raw)
    }

    fn price(&mut self) -> RecordResult<Money> {
        let raw = self.text("price")?;
        self.parse_price(&raw)
    }

    fn parse_price(&self, raw: &str) -> RecordResult<Money> {
        self.parse_number("price", raw).map(Money::from)
    }

    fn parse_number(&self, field: &'static str, raw: &str) -> RecordResult<u32> {
        raw.trim()
            .parse()
            .map_err(|_| RecordError::InvalidNumber {
                variant: self.variant,
                field,
                value: raw.to_string(),
            })
    }

    fn flag(&mut self, field: &'static str) -> RecordResult<bool> {
        let raw = self.text(field)?;
        match raw.trim() {
            "1" => Ok(true),
            "2" => Ok(false),
            _ => Err(RecordError::InvalidFlag {
                variant: self.variant,
                field,
                value: raw,
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn audio() -> Commodity {
        Commodity::audio(
            "Studio Monitor",
            Money::from_units(100),
            "Flat response",
            AudioSpec {
                low_freq_hz: 20,
                high_freq_khz: 20,
                sensitivity_db: 90,
                impedance_ohm: 32,
            },
        )
    }

    fn phone() -> Commodity {
        Commodity::smartphone(
            "Pixel 9",
            Money::from_units(799),
            "Google phone",
            SmartphoneSpec {
                screen_inch: 6,
                cellular: "5G, Wi-Fi 7".to_string(),
                camera_px: 50_000_000,
                chip: "Tensor G4".to_string(),
                weight_g: 198,
                video_playback_hours: 24,
            },
        )
    }

    fn laptop(has_rgb: bool) -> Commodity {
        Commodity::laptop(
            "ThinkPad X1",
            Money::from_units(1899),
            "",
            LaptopSpec {
                screen_inch: 14,
                os: "Linux".to_string(),
                cpu: "Core Ultra 7".to_string(),
                gpu: "Arc".to_string(),
                max_memory_gb: 32,
                disk_gb: 1024,
                has_rgb,
            },
        )
    }

    #[test]
    fn test_audio_field_order() {
        assert_eq!(
            encode(&audio()),
            "Studio Monitor\n100\n20\n20\n90\n32\nFlat response\n"
        );
    }

    #[test]
    fn test_smartphone_field_order() {
        assert_eq!(
            encode(&phone()),
            "799\nPixel 9\n6\n5G, Wi-Fi 7\n50000000\nTensor G4\n198\n24\nGoogle phone\n"
        );
    }

    #[test]
    fn test_laptop_field_order_and_flag() {
        assert_eq!(
            encode(&laptop(false)),
            "1899\nThinkPad X1\n14\nLinux\n32\nCore Ultra 7\n2\nArc\n1024\n\n"
        );
        assert!(encode(&laptop(true)).contains("\nCore Ultra 7\n1\nArc\n"));
    }

    #[test]
    fn test_every_variant_decodes_what_it_encodes() {
        for (variant, commodity) in [
            (Variant::Audio, audio()),
            (Variant::Smartphone, phone()),
            (Variant::Laptop, laptop(true)),
            (Variant::Laptop, laptop(false)),
        ] {
            let text = encode(&commodity);
            let decoded = decode(variant, &mut text.lines()).unwrap();
            assert_eq!(decoded, Some(commodity));
        }
    }

    #[test]
    fn test_decode_all_reads_until_end() {
        let second = Commodity::audio("Other", Money::from_units(5), "x", AudioSpec::default());
        let text = encode_all([&audio(), &second]);

        let decoded = decode_all(Variant::Audio, &text);
        assert_eq!(decoded.commodities, vec![audio(), second]);
        assert_eq!(decoded.stopped_by, None);
    }

    #[test]
    fn test_empty_text_is_no_records() {
        let decoded = decode_all(Variant::Smartphone, "");
        assert!(decoded.commodities.is_empty());
        assert_eq!(decoded.stopped_by, None);
    }

    #[test]
    fn test_truncated_record_keeps_earlier_records() {
        let mut text = encode(&phone());
        text.push_str("650\nGalaxy\n6\n");

        let decoded = decode_all(Variant::Smartphone, &text);
        assert_eq!(decoded.commodities, vec![phone()]);
        assert_eq!(
            decoded.stopped_by,
            Some(RecordError::Truncated {
                variant: Variant::Smartphone,
                field: "cellular",
            })
        );
    }

    #[test]
    fn test_malformed_number_stops_partition() {
        let text = "Studio Monitor\nabc\n20\n20\n90\n32\nFlat\n";
        let decoded = decode_all(Variant::Audio, text);
        assert!(decoded.commodities.is_empty());
        assert!(matches!(
            decoded.stopped_by,
            Some(RecordError::InvalidNumber { field: "price", .. })
        ));
    }

    #[test]
    fn test_bad_rgb_flag_is_rejected() {
        let text = encode(&laptop(true)).replace("\n1\nArc", "\n7\nArc");
        let err = decode(Variant::Laptop, &mut text.lines()).unwrap_err();
        assert!(matches!(err, RecordError::InvalidFlag { field: "rgb", .. }));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let text = "\n100\n1\n1\n1\n1\nx\n";
        let err = decode(Variant::Audio, &mut text.lines()).unwrap_err();
        assert_eq!(err, RecordError::EmptyName { variant: Variant::Audio });
    }

    #[test]
    fn test_windows_line_endings() {
        let text = encode(&audio()).replace('\n', "\r\n");
        let decoded = decode_all(Variant::Audio, &text);
        assert_eq!(decoded.commodities, vec![audio()]);
    }
}
