use std::collections::HashMap;
use std::fs;
use std::path::Path;

const HEADER: &str = "  1 This software and database is being provided to you, the LICENSEE, by  \n  2 Princeton University under the following license.  \n";

/// Write `data.*` files whose records reference each other through `{name}`
/// placeholders. Offsets are fixed-width, so they can be computed before
/// substitution. Returns the offset of every named record.
pub fn write_dict(dir: &Path, files: &[(&str, &[(&str, &str)])]) -> HashMap<String, u32> {
    let mut offsets = HashMap::new();
    for (_, records) in files {
        let mut pos = HEADER.len();
        for (name, template) in records.iter() {
            offsets.insert(format!("{{{name}}}"), pos as u32);
            pos += blank_placeholders(template).len() + 1;
        }
    }
    for (file, records) in files {
        let mut text = HEADER.to_string();
        for (_, template) in records.iter() {
            let mut line = template.to_string();
            for (placeholder, offset) in &offsets {
                line = line.replace(placeholder, &format!("{offset:08}"));
            }
            text.push_str(&line);
            text.push('\n');
        }
        fs::write(dir.join(file), text).unwrap();
    }
    offsets
}

fn blank_placeholders(template: &str) -> String {
    let mut out = String::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let end = start + rest[start..].find('}').unwrap();
        out.push_str(&rest[..start]);
        out.push_str("00000000");
        rest = &rest[end + 1..];
    }
    out.push_str(rest);
    out
}
