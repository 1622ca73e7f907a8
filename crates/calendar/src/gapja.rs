//! Sexagenary (gapja) names of a lunar date.

use eumryeok_table::{BASE_YEAR, TableError};
use serde::{Deserialize, Serialize};

use crate::absolute::lunar_absolute_day;
use crate::config::RenderConfig;
use crate::date::LunarDate;

/// Character set used to render sexagenary names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Hangul, e.g. 정유년.
    #[default]
    Korean,
    /// Hanja, e.g. 丁酉年.
    Chinese,
}

struct Glyphs {
    stems: [char; 10],
    branches: [char; 12],
    /// Year, month and day unit characters.
    units: [char; 3],
    intercalation: char,
}

const KOREAN: Glyphs = Glyphs {
    stems: ['갑', '을', '병', '정', '무', '기', '경', '신', '임', '계'],
    branches: ['자', '축', '인', '묘', '진', '사', '오', '미', '신', '유', '술', '해'],
    units: ['년', '월', '일'],
    intercalation: '윤',
};

const CHINESE: Glyphs = Glyphs {
    stems: ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'],
    branches: ['子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥'],
    units: ['年', '月', '日'],
    intercalation: '閏',
};

impl Script {
    fn glyphs(self) -> &'static Glyphs {
        match self {
            Self::Korean => &KOREAN,
            Self::Chinese => &CHINESE,
        }
    }
}

/// One heavenly stem (0..10) and earthly branch (0..12) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StemBranch {
    pub stem: u8,
    pub branch: u8,
}

impl StemBranch {
    fn from_offsets(stem: i64, branch: i64) -> Self {
        Self {
            stem: stem.rem_euclid(10) as u8,
            branch: branch.rem_euclid(12) as u8,
        }
    }

    /// Position in the sixty-term cycle, from 1 (갑자) to 60 (계해).
    pub fn cycle_index(self) -> u32 {
        (6 * i32::from(self.stem) - 5 * i32::from(self.branch)).rem_euclid(60) as u32 + 1
    }

    fn push_to(self, out: &mut String, glyphs: &Glyphs, unit: usize) {
        out.push(glyphs.stems[usize::from(self.stem)]);
        out.push(glyphs.branches[usize::from(self.branch)]);
        out.push(glyphs.units[unit]);
    }
}

/// Sexagenary names of the year, month and day of a lunar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gapja {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    pub is_intercalation: bool,
}

impl Gapja {
    /// Derives the names of `date`.
    ///
    /// A date whose absolute day number is not positive, such as the unset
    /// default, yields 갑자 for all three positions.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if `date.year` is outside the table.
    pub fn from_lunar(date: &LunarDate) -> Result<Self, TableError> {
        let absolute_day =
            lunar_absolute_day(date.year, date.month, date.day, date.is_intercalation)?;
        if absolute_day <= 0 {
            return Ok(Self {
                is_intercalation: date.is_intercalation,
                ..Self::default()
            });
        }

        let years = i64::from(date.year) - i64::from(BASE_YEAR);
        let month_count = i64::from(date.month) + 12 * years;
        let day = i64::from(absolute_day);

        Ok(Self {
            year: StemBranch::from_offsets(years + 6, years),
            month: StemBranch::from_offsets(month_count + 3, month_count + 1),
            day: StemBranch::from_offsets(day + 4, day + 2),
            is_intercalation: date.is_intercalation,
        })
    }

    /// Renders `"<year> <month> <day>"` in `script`, marking an
    /// intercalation month with e.g. `" (윤월)"`.
    pub fn render(&self, script: Script) -> String {
        self.render_with(&RenderConfig::new().with_script(script))
    }

    /// Renders with explicit options.
    pub fn render_with(&self, config: &RenderConfig) -> String {
        let glyphs = config.script().glyphs();
        let mut out = String::with_capacity(48);
        self.year.push_to(&mut out, glyphs, 0);
        out.push(' ');
        self.month.push_to(&mut out, glyphs, 1);
        out.push(' ');
        self.day.push_to(&mut out, glyphs, 2);
        if self.is_intercalation && config.intercalation_marker() {
            out.push_str(" (");
            out.push(glyphs.intercalation);
            out.push(glyphs.units[1]);
            out.push(')');
        }
        out
    }
}
