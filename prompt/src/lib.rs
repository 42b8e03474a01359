//! # Prompt
//!
//! Composes an improved design prompt from a single user keyword.
//!
//! ## Tables
//!
//! Five static keyword→sentence category tables, tested in a fixed order:
//!
//! - **Design styles** (modern, minimalist, brutalist, ...)
//! - **Form shapes** (round, rectangular, geometric, ...)
//! - **Aesthetic approaches** (bold, symmetrical, rustic, ...)
//! - **Functional elements** (buttons, ergonomic, modular, ...)
//! - **Materials** (wood, metal, glass, carbon fiber)
//!
//! ## Matching
//!
//! Lookup is exact, case-normalized string equality (lowercase + trim), never
//! substring or fuzzy match: a multi-word phrase that is not itself a table
//! key matches nothing, even if it contains a matching word. Tables are
//! tested independently, so one keyword may match several tables (e.g.
//! "futuristic" is both a style and an aesthetic); the composed prompt
//! concatenates every hit in table order.
//!
//! ## Usage
//!
//! Used by the `handlers` crate for free-text messages. [`compose`] returns
//! `None` (not an empty string) when no table matches, so the caller can
//! reply with a help message instead of an empty prompt.

/// One category table: name plus keyword→sentence entries.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTable {
    pub name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl CategoryTable {
    /// Returns the sentence for `keyword` (already normalized), if present.
    pub fn lookup(&self, keyword: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, sentence)| *sentence)
    }

    /// Keywords of this table, in declaration order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }
}

/// Design styles.
pub const DESIGN_STYLES: CategoryTable = CategoryTable {
    name: "style",
    entries: &[
        (
            "modern",
            "A modern product with sleek surfaces, minimal detailing, and a futuristic look.",
        ),
        (
            "minimalist",
            "A minimalist design featuring clean lines, a monochrome color scheme, and a functional aesthetic.",
        ),
        (
            "futuristic",
            "A futuristic concept with smooth, curved surfaces, glowing neon elements, and advanced materials.",
        ),
        (
            "brutalist",
            "A Brutalist design with sharp, angular forms, raw concrete textures, and bold geometric structures.",
        ),
        (
            "industrial",
            "An industrial-style product using exposed metal elements, rugged textures, and a mechanical aesthetic.",
        ),
        (
            "organic",
            "An organic-shaped design with smooth, flowing curves inspired by nature.",
        ),
        (
            "art-deco",
            "An Art-Deco inspired piece with luxurious metallic accents, bold geometric patterns, and vintage elegance.",
        ),
    ],
};

/// Form shapes.
pub const FORM_SHAPES: CategoryTable = CategoryTable {
    name: "shape",
    entries: &[
        ("round", "A round and smooth shape with soft transitions."),
        ("rectangular", "A rectangular, boxy form with precise edges."),
        (
            "cylindrical",
            "A cylindrical body with a continuous, sleek surface.",
        ),
        (
            "geometric",
            "A highly geometric structure with defined angles and sharp edges.",
        ),
        (
            "organic",
            "An organic, free-flowing shape inspired by nature.",
        ),
        (
            "asymmetrical",
            "An asymmetrical composition with dynamic balance.",
        ),
    ],
};

/// Aesthetic approaches.
pub const AESTHETIC_APPROACHES: CategoryTable = CategoryTable {
    name: "aesthetic",
    entries: &[
        (
            "bold",
            "A bold design that stands out with high contrast and powerful forms.",
        ),
        (
            "symmetrical",
            "A perfectly symmetrical design with balanced proportions.",
        ),
        (
            "minimal",
            "A minimalist aesthetic with reduced detailing and maximum simplicity.",
        ),
        (
            "futuristic",
            "A futuristic look with clean lines and tech-inspired features.",
        ),
        (
            "rustic",
            "A rustic aesthetic with natural textures and raw materials.",
        ),
    ],
};

/// Functional elements.
pub const FUNCTIONAL_ELEMENTS: CategoryTable = CategoryTable {
    name: "functional",
    entries: &[
        (
            "buttons",
            "Incorporates intuitive buttons for easy interaction.",
        ),
        (
            "touch-sensitive",
            "Features a modern, touch-sensitive interface.",
        ),
        (
            "ergonomic",
            "Designed with ergonomic grip and usability in mind.",
        ),
        (
            "modular",
            "A modular design allowing interchangeable components.",
        ),
    ],
};

/// Materials.
pub const MATERIALS: CategoryTable = CategoryTable {
    name: "material",
    entries: &[
        (
            "wood",
            "Made from finely polished wood with natural grain details.",
        ),
        (
            "metal",
            "Constructed from brushed aluminum for a premium feel.",
        ),
        (
            "glass",
            "Designed with transparent or frosted glass surfaces.",
        ),
        (
            "carbon fiber",
            "Features lightweight and strong carbon fiber elements.",
        ),
    ],
};

/// All category tables in composition order: style → shape → aesthetic →
/// functional → material.
pub const CATEGORY_TABLES: [&CategoryTable; 5] = [
    &DESIGN_STYLES,
    &FORM_SHAPES,
    &AESTHETIC_APPROACHES,
    &FUNCTIONAL_ELEMENTS,
    &MATERIALS,
];

/// Normalizes user input for table lookup: trim + lowercase. Idempotent.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Composes the improved prompt for one input keyword.
///
/// Normalizes the input, tests membership against every category table
/// independently, and joins the matched sentences with a single space in
/// table order. Returns `None` when zero tables match.
pub fn compose(input: &str) -> Option<String> {
    let keyword = normalize(input);

    let sentences: Vec<&'static str> = CATEGORY_TABLES
        .iter()
        .filter_map(|table| table.lookup(&keyword))
        .collect();

    if sentences.is_empty() {
        None
    } else {
        Some(sentences.join(" "))
    }
}
