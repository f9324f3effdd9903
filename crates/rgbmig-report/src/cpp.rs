//! C++ source constructs for paste-back into the save patcher.
//!
//! Each renderer is a pure string builder; writing the result anywhere is
//! the caller's concern.

use rgbmig_model::{FlagCorrelation, MapCorrelation};

/// Version labels baked into the rendered flag-map function, e.g. `V7`/`V8`
/// produce `uint16_t mapV7EventFlagToV8(uint16_t v7)`.
#[derive(Debug, Clone)]
pub struct FlagMapOptions {
    pub from_version: String,
    pub to_version: String,
}

impl Default for FlagMapOptions {
    fn default() -> Self {
        Self {
            from_version: "V7".to_string(),
            to_version: "V8".to_string(),
        }
    }
}

/// Renders the old→new flag lookup as a C++ function over an
/// `std::unordered_map`, one `{old, new}` entry per correlated name with
/// the name as a trailing comment.
pub fn render_flag_map(entries: &[FlagCorrelation], options: &FlagMapOptions) -> String {
    let from = &options.from_version;
    let to = &options.to_version;
    let argument = from.to_lowercase();

    let mut out = String::new();
    out.push_str(&format!(
        "// Converts a {from} event flag to a {to} event flag\n"
    ));
    out.push_str(&format!(
        "uint16_t map{from}EventFlagTo{to}(uint16_t {argument}) {{\n"
    ));
    out.push_str("\tstd::unordered_map<uint16_t, uint16_t> indexMap = {\n");
    for entry in entries {
        out.push_str(&format!(
            "\t\t{{{}, {}}},  // {}\n",
            entry.source, entry.target, entry.name
        ));
    }
    out.push_str("\t};\n\n");
    out.push_str(&format!(
        "\t// Return the corresponding {to} event flag or INVALID_EVENT_FLAG if not found\n"
    ));
    out.push_str(&format!(
        "\treturn indexMap.find({argument}) != indexMap.end() ? indexMap[{argument}] : INVALID_EVENT_FLAG;\n"
    ));
    out.push_str("}\n");
    out
}

/// Renders the unused-index report as a `std::vector<int>` initializer,
/// wrapped at `per_line` values per row.
pub fn render_unused_array(indexes: &[u32], per_line: usize) -> String {
    let per_line = per_line.max(1);
    let mut out = String::from("const std::vector<int> unusedEventIndexes = {\n");
    let rows: Vec<String> = indexes
        .chunks(per_line)
        .map(|chunk| {
            let values: Vec<String> = chunk.iter().map(|value| value.to_string()).collect();
            format!("\t{}", values.join(", "))
        })
        .collect();
    out.push_str(&rows.join(",\n"));
    if rows.is_empty() {
        // Keep the empty initializer on one brace pair per line.
        out.pop();
    }
    out.push_str("\n};\n");
    out
}

/// Renders grouped correlations as `std::unordered_map` pair entries, one
/// `{{g1, m1}, {g2, m2}},  // NAME` line per matched name.
pub fn render_map_pairs(entries: &[MapCorrelation]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "{{{{{}, {}}}, {{{}, {}}}}},  // {}\n",
            entry.source.group, entry.source.map, entry.target.group, entry.target.map, entry.name
        ));
    }
    out
}
