//! YAML export

use std::io::Write;

use super::GuideExport;
use crate::error::GuideResult;
use crate::models::Catalog;

/// Write the guide as YAML, preceded by a comment header
pub fn export_guide_yaml<W: Write>(catalog: &Catalog, writer: &mut W) -> GuideResult<()> {
    let export = GuideExport::from_catalog(catalog);

    writeln!(writer, "# {}", export.title)?;
    writeln!(writer, "# {} steps", export.steps.len())?;
    serde_yaml::to_writer(&mut *writer, &export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_export() {
        let mut buf = Vec::new();
        export_guide_yaml(&Catalog::builtin(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("# AP Statistics"));
        let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(value["steps"].as_sequence().unwrap().len(), 5);
        assert_eq!(value["steps"][4]["icon"], "🧩");
    }
}
