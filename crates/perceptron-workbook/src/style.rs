// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Workbook colour scheme and cell styles
//!
//! Colour coding is part of the lesson: yellow cells hold weights, purple
//! cells hold inputs, orange marks the weighted sum, green and red mark the
//! summary counts.

/// Fill colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    BlueHeader,
    YellowWeights,
    PurpleInputs,
    GreenCorrect,
    RedIncorrect,
    LightBlueDocs,
    OrangeCalc,
    White,
}

impl Palette {
    /// `0xRRGGBB`
    pub const fn rgb(self) -> u32 {
        match self {
            Palette::BlueHeader => 0x4472C4,
            Palette::YellowWeights => 0xFFF2CC,
            Palette::PurpleInputs => 0xE2D0F8,
            Palette::GreenCorrect => 0xC6EFCE,
            Palette::RedIncorrect => 0xFFC7CE,
            Palette::LightBlueDocs => 0xDEEBF7,
            Palette::OrangeCalc => 0xFCE4D6,
            Palette::White => 0xFFFFFF,
        }
    }
}

/// Font colour of the "change these cells" hint
pub const WARNING_FONT: u32 = 0xFF0000;
/// Font colour of the weight descriptions
pub const NOTE_FONT: u32 = 0x666666;

/// Semantic style of a cell; the writer maps each to a concrete format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStyle {
    #[default]
    Plain,
    /// 18pt bold white on blue, centred
    Title,
    /// Italic on light blue, centred
    Subtitle,
    /// 14pt bold
    SectionHeading,
    /// Bold red
    Warning,
    /// Bold white on blue, bordered
    TableHeader,
    /// Bold centred with fill, bordered
    GroupHeader(Palette),
    /// Small bold centred, bordered
    ColumnHeader,
    /// Thin border
    Bordered,
    /// Thin border with fill
    Filled(Palette),
    /// Yellow, bold 12pt, bordered
    EditableWeight,
    /// Grey italic
    Note,
    /// Bold label
    Label,
}
