//! Plain-text views of stars: console summaries, the saved text report, the
//! single-star inspection and the reading guide.
//!
//! Like the chart writer, everything streams into any `std::io::Write`.

use std::io::Write;

use chrono::{DateTime, Local};

use crate::core::angle::{format_degrees, format_hours};
use crate::core::catalog::Catalog;
use crate::core::classifier::ColorClass;
use crate::core::error::Result;
use crate::core::models::StarRecord;
use crate::core::raster::Glyph;

const RULE_WIDTH: usize = 70;
const REPORT_PREVIEW_BITS: usize = 80;
const SUMMARY_PREVIEW_BITS: usize = 32;
const GUIDE_SAMPLE_STARS: usize = 5;

/// Streaming writer for text views.
pub struct TextReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn rule(&mut self, c: char) -> Result<()> {
        writeln!(self.writer, "{}", c.to_string().repeat(RULE_WIDTH))?;
        Ok(())
    }

    fn banner(&mut self, title: &str) -> Result<()> {
        self.rule('=')?;
        writeln!(self.writer, "{}", title)?;
        self.rule('=')
    }

    /// Short block printed for each star of a batch.
    pub fn write_star_summary(&mut self, record: &StarRecord) -> Result<()> {
        let w = &mut self.writer;
        writeln!(w)?;
        writeln!(w, "STAR #{}: '{}'", record.id, record.word)?;
        writeln!(
            w,
            "   Coordinates: RA {}, Dec {}",
            format_hours(record.coordinate.azimuth()),
            format_degrees(record.coordinate.polar())
        )?;
        writeln!(w, "   Constellation: {}", record.constellation)?;
        writeln!(
            w,
            "   Color: {}, Magnitude: {:.2}",
            record.color, record.brightness
        )?;
        writeln!(w, "   Nearest bright star: {}", record.nearest.name)?;
        writeln!(w, "   Binary: {}", record.bits.preview(SUMMARY_PREVIEW_BITS))?;
        Ok(())
    }

    /// Full report as saved next to the JSON file.
    pub fn write_report(
        &mut self,
        generated: &DateTime<Local>,
        words: &[String],
        records: &[StarRecord],
    ) -> Result<()> {
        self.banner("WORD STAR MAP - REPORT")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            generated.format("%d.%m.%Y %H:%M:%S")
        )?;
        writeln!(self.writer, "Word count: {}", words.len())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "WORDS AND THEIR STARS:")?;
        self.rule('-')?;

        for record in records {
            let w = &mut self.writer;
            writeln!(w)?;
            writeln!(w, "Star #{}: '{}'", record.id, record.word)?;
            writeln!(
                w,
                "  Coordinates: RA {}, Dec {}",
                format_hours(record.coordinate.azimuth()),
                format_degrees(record.coordinate.polar())
            )?;
            writeln!(w, "  Constellation: {}", record.constellation)?;
            writeln!(w, "  Color: {}", record.color)?;
            writeln!(w, "  Apparent magnitude: {:.2}", record.brightness)?;
            writeln!(
                w,
                "  Nearest bright star: {} (distance: {:.2}°)",
                record.nearest.name, record.nearest_distance
            )?;
            writeln!(
                w,
                "  Binary ({} bits): {}",
                record.bit_length(),
                record.bits.preview(REPORT_PREVIEW_BITS)
            )?;
        }

        writeln!(self.writer)?;
        self.rule('=')?;
        writeln!(self.writer, "HOW TO READ THE MAP:")?;
        self.rule('-')?;
        writeln!(
            self.writer,
            "RA (right ascension) - sky longitude, measured in hours (0-24)"
        )?;
        writeln!(
            self.writer,
            "Dec (declination) - sky latitude, measured in degrees (-90 to +90)"
        )?;
        writeln!(self.writer, "Magnitude: the smaller the number, the brighter the star")?;
        for glyph in Glyph::ALL {
            writeln!(self.writer, "  {} - {}", glyph.symbol(), glyph.description())?;
        }
        Ok(())
    }

    /// Detailed view of one star.
    pub fn write_inspection(&mut self, record: &StarRecord) -> Result<()> {
        let azimuth = record.coordinate.azimuth();
        let polar = record.coordinate.polar();

        writeln!(self.writer)?;
        self.banner(&format!("STAR ANALYSIS FOR WORD: '{}'", record.word))?;

        let w = &mut self.writer;
        writeln!(w)?;
        writeln!(w, "COORDINATES:")?;
        writeln!(w, "   Right ascension (RA): {}", format_hours(azimuth))?;
        writeln!(w, "   Declination (Dec): {}", format_degrees(polar))?;
        writeln!(w, "   (RA: {:.4} h, Dec: {:.4}°)", azimuth, polar)?;

        writeln!(w)?;
        writeln!(w, "CHARACTERISTICS:")?;
        writeln!(w, "   Constellation: {}", record.constellation)?;
        writeln!(w, "   Color: {}", record.color)?;
        writeln!(w, "   Apparent magnitude: {:.2}", record.brightness)?;
        writeln!(
            w,
            "   Chart glyph: {}",
            Glyph::for_brightness(record.brightness).symbol()
        )?;

        writeln!(w)?;
        writeln!(w, "NEAREST OBJECTS:")?;
        writeln!(w, "   Nearest bright star: {}", record.nearest.name)?;
        writeln!(w, "   Distance: {:.2}°", record.nearest_distance)?;

        writeln!(w)?;
        writeln!(w, "BINARY CODE:")?;
        writeln!(w, "   Length: {} bits", record.bit_length())?;
        let bits = record.bits.to_bit_string();
        let shown = &bits[..bits.len().min(REPORT_PREVIEW_BITS)];
        writeln!(w, "   First {} bits: {}", REPORT_PREVIEW_BITS, shown)?;

        writeln!(w)?;
        writeln!(w, "PLANETARIUM COORDINATES:")?;
        writeln!(w, "   RA={:.6}h, Dec={:.6}°", azimuth, polar)?;
        Ok(())
    }

    /// Reference text on coordinates, magnitudes and colors.
    pub fn write_guide(&mut self, catalog: &Catalog) -> Result<()> {
        writeln!(self.writer)?;
        self.banner("GUIDE: CELESTIAL COORDINATES")?;

        let w = &mut self.writer;
        writeln!(w)?;
        writeln!(w, "COORDINATE SYSTEM:")?;
        writeln!(w, "  RA (right ascension) is the sky's longitude")?;
        writeln!(w, "    - measured in hours, minutes and seconds (0h to 24h)")?;
        writeln!(w, "    - 1 hour = 15 degrees, 1 minute = 15 arcminutes")?;
        writeln!(w, "  Dec (declination) is the sky's latitude")?;
        writeln!(w, "    - measured in degrees, minutes and seconds (-90° to +90°)")?;
        writeln!(w, "    - 0° = celestial equator, +90° = north pole, -90° = south pole")?;
        writeln!(w)?;
        writeln!(w, "MAGNITUDE:")?;
        writeln!(w, "  The SMALLER the number, the BRIGHTER the star.")?;
        writeln!(w, "  Word stars range from -1 (brightest) to 6 (limit of the naked eye).")?;
        for glyph in Glyph::ALL {
            writeln!(w, "    {} {}", glyph.symbol(), glyph.description())?;
        }
        writeln!(w)?;
        writeln!(w, "STAR COLORS:")?;
        for color in ColorClass::ALL {
            writeln!(w, "  {:<7} {}", color.name(), color.temperature_hint())?;
        }
        writeln!(w)?;
        writeln!(w, "BRIGHT STAR EXAMPLES:")?;
        for star in catalog.stars().iter().take(GUIDE_SAMPLE_STARS) {
            writeln!(
                w,
                "  - {}: RA={:.2}h, Dec={:.2}°",
                star.name,
                star.coordinate.azimuth(),
                star.coordinate.polar()
            )?;
        }
        Ok(())
    }
}
