//! Integration tests for nlt table-to-sentence conversion

use std::fs;
use std::path::Path;

use nlt::{
    convert_str, files::write_lines, run, ConversionError, FormatterKind, ParserKind, RunConfig,
};

const MENU_CSV: &str = "topping,vegan\nmeat,false\nolives,true\n";

fn named_row_config(infile: &Path, parser: &str) -> RunConfig {
    let text = format!(
        r#"{{
            "infile": {infile:?},
            "parser": "{parser}",
            "formatter": "NamedRow",
            "row_headers": 1,
            "col_headers": 1,
            "link": "If",
            "x_label": "topping",
            "eq": "is"
        }}"#,
        infile = infile.display().to_string(),
        parser = parser,
    );
    serde_json::from_str(&text).unwrap()
}

// ============================================================================
// Readers - every format yields the same table
// ============================================================================

mod readers {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURES: [(&str, &str, &str); 7] = [
        ("menu.csv", "CSV", MENU_CSV),
        ("menu.tsv", "TSV", "topping\tvegan\nmeat\tfalse\nolives\ttrue\n"),
        (
            "menu.jsonl",
            "JSONLines",
            "{\"vegan\": false, \"topping\": \"meat\"}\n\
             {\"topping\": \"olives\", \"vegan\": true}\n",
        ),
        (
            "menu.json",
            "JSONArrObj",
            r#"[{"topping": "meat", "vegan": false}, {"topping": "olives", "vegan": true}]"#,
        ),
        (
            "menu_arr.json",
            "JSONArrArr",
            r#"[["topping", "vegan"], ["meat", false], ["olives", true]]"#,
        ),
        (
            "menu.md",
            "MD",
            "## Menu\n\n| topping | vegan |\n|---|---|\n| meat | false |\n| olives | true |\n",
        ),
        (
            "menu.html",
            "HTML",
            "<html><body><h2>Menu</h2><table>\
             <tr><th>topping</th><th>vegan</th></tr>\
             <tr><td>meat</td><td>false</td></tr>\
             <tr><td>olives</td><td>true</td></tr>\
             </table></body></html>",
        ),
    ];

    #[test]
    fn test_all_formats_agree() {
        let dir = tempfile::tempdir().unwrap();
        for (name, parser, content) in FIXTURES {
            let path = dir.path().join(name);
            fs::write(&path, content).unwrap();

            let output = run(&named_row_config(&path, parser)).unwrap();
            assert!(!output.has_warnings(), "{} produced warnings", parser);
            assert_eq!(output.lines.len(), 6, "{}", parser);
            assert_eq!(output.lines[3], "If topping is meat, vegan is false", "{}", parser);
            assert_eq!(output.lines[5], "If topping is olives, vegan is true", "{}", parser);
        }
    }

    #[test]
    fn test_json_missing_values_render_as_nan() {
        let mut config = named_row_config(Path::new("unused"), "JSONArrObj");
        config.config.formatter = "NamedCol".to_string();
        config.fields.y_label = "column".to_string();
        let input = r#"[{"topping": "meat", "vegan": false}, {"topping": "tofu"}]"#;
        let output = convert_str(input, &config).unwrap();
        assert_eq!(output.lines[5], "If column is vegan, tofu is NaN");
    }

    #[test]
    fn test_unreadable_input_names_the_format() {
        let config = named_row_config(Path::new("unused"), "MD");
        let err = convert_str("no tables here", &config).unwrap_err();
        match err {
            ConversionError::ParseError { format, .. } => assert_eq!(format, "MD"),
            other => panic!("unexpected error: {}", other),
        }
    }
}

// ============================================================================
// Formatters on real-looking tables
// ============================================================================

mod formatting {
    use super::*;
    use pretty_assertions::assert_eq;

    const SIZES_CSV: &str = "size,price\nsmall,$10\nlarge,$14\n";

    #[test]
    fn test_corner_scenario() {
        let config: RunConfig = serde_json::from_str(
            r#"{"parser": "CSV", "formatter": "UnnamedCoord1",
                "row_headers": 1, "col_headers": 1}"#,
        )
        .unwrap();
        let output = convert_str("_,col1\nrow1,val11\n", &config).unwrap();
        assert_eq!(output.lines[3], "row1 and col1 val11");
    }

    #[test]
    fn test_col_val_lists_values_per_column() {
        let config: RunConfig = serde_json::from_str(
            r#"{"parser": "CSV", "formatter": "ColVal", "col_headers": 1,
                "pre": "Available", "link": "are"}"#,
        )
        .unwrap();
        let output = convert_str(SIZES_CSV, &config).unwrap();
        assert_eq!(
            output.lines,
            vec![
                "Available size are size, small, large",
                "Available price are price, $10, $14",
            ]
        );
    }

    #[test]
    fn test_legacy_formatter_names() {
        let mut config: RunConfig =
            serde_json::from_str(r#"{"parser": "CSV", "formatter": "NamedRowFormatter"}"#).unwrap();
        let legacy = convert_str(SIZES_CSV, &config).unwrap();
        config.config.formatter = FormatterKind::NamedRow.name().to_string();
        let canonical = convert_str(SIZES_CSV, &config).unwrap();
        assert!(!legacy.has_warnings());
        assert_eq!(legacy, canonical);
    }

    #[test]
    fn test_fallbacks_warn_and_use_defaults() {
        let config: RunConfig =
            serde_json::from_str(r#"{"parser": "Excel", "formatter": "Bogus"}"#).unwrap();
        let output = convert_str(SIZES_CSV, &config).unwrap();
        assert_eq!(output.warnings.len(), 2);
        assert!(output.warnings[0].message.contains("defaulting to CSV"));
        assert!(output.warnings[1].message.contains("defaulting to UnnamedCoord1"));

        let grid = ParserKind::Csv.parse(SIZES_CSV).unwrap();
        let table = nlt::build_table(&grid, 0, 0);
        let expected = FormatterKind::UnnamedCoord1.format(&table, &config.fields);
        assert_eq!(output.lines, expected);
    }
}

// ============================================================================
// Config files, output and lastrun
// ============================================================================

mod config_files {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_run_writes_output_and_lastrun() {
        let dir = tempfile::tempdir().unwrap();
        let infile = dir.path().join("menu.csv");
        let outfile = dir.path().join("out").join("menu.txt");
        let config_path = dir.path().join("config.json");
        let lastrun_path = dir.path().join("lastrun.json");
        fs::write(&infile, MENU_CSV).unwrap();

        let mut config = named_row_config(&infile, "CSV");
        config.config.outfile = outfile.display().to_string();
        fs::write(&config_path, config.to_json().unwrap()).unwrap();

        let config = RunConfig::load(&config_path).unwrap();
        let output = run(&config).unwrap();
        fs::create_dir_all(outfile.parent().unwrap()).unwrap();
        write_lines(&config.config.outfile, &output.lines).unwrap();
        config.save_lastrun(&lastrun_path).unwrap();

        let written = fs::read_to_string(&outfile).unwrap();
        assert!(!written.ends_with('\n'));
        assert_eq!(written.lines().count(), 6);
        assert_eq!(written.lines().nth(3), Some("If topping is meat, vegan is false"));

        assert_eq!(RunConfig::load(&lastrun_path).unwrap(), config);
    }

    #[test]
    fn test_yaml_config_with_custom_template() {
        let dir = tempfile::tempdir().unwrap();
        let infile = dir.path().join("sizes.csv");
        fs::write(&infile, "size,price\nsmall,$10\nlarge,$14\n").unwrap();

        let config_path = dir.path().join("nlt.yaml");
        let yaml = format!(
            "infile: {:?}\nparser: CSV\nformatter: RowVal\nrow_headers: 1\ncol_headers: 1\n\
             eq: costs\ntemplate: \"A {{x_head}} pizza {{eq}} {{value}}\"\n",
            infile.display().to_string()
        );
        fs::write(&config_path, yaml).unwrap();

        let config = RunConfig::load(&config_path).unwrap();
        let output = run(&config).unwrap();
        assert_eq!(output.lines[3], "A small pizza costs $10");
        assert_eq!(output.lines[5], "A large pizza costs $14");
    }

    #[test]
    fn test_toml_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("nlt.toml");
        fs::write(
            &config_path,
            "parser = \"TSV\"\nformatter = \"UnnamedRowKeyVal\"\nrow_headers = 1\neq = \"is\"\n",
        )
        .unwrap();

        let config = RunConfig::load(&config_path).unwrap();
        assert_eq!(config.parser().0, ParserKind::Tsv);
        assert_eq!(config.formatter().0, FormatterKind::UnnamedRowKeyVal);
    }

    #[test]
    fn test_missing_config_is_an_io_error() {
        let err = RunConfig::load("no/such/config.json").unwrap_err();
        assert!(matches!(err, ConversionError::Io { .. }));
    }
}
