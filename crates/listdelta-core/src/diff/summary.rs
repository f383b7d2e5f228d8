//! Human-readable summary renderer for edit scripts.

use crate::diff::model::EditScript;

/// Render a human-readable Markdown/text summary of an [`EditScript`].
///
/// Intended for debug overlays and change-log displays. Informational
/// only; the structured script is the source of truth.
pub fn render_summary(script: &EditScript) -> String {
    let mut out = String::new();

    out.push_str("## Edit Script\n\n");

    if script.is_empty() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    out.push_str(&format!("**Operations**: {}\n\n", script.len()));
    out.push_str(&format!(
        "| Kind | Count |\n\
         |---|---|\n\
         | Row deletes | {} |\n\
         | Section deletes | {} |\n\
         | Section inserts | {} |\n\
         | Row inserts | {} |\n\
         | Section moves | {} |\n\
         | Row moves | {} |\n\
         | Row reloads | {} |\n\n",
        script.row_deletes.len(),
        script.section_deletes.len(),
        script.section_inserts.len(),
        script.row_inserts.len(),
        script.section_moves.len(),
        script.row_moves.len(),
        script.row_reloads.len(),
    ));

    if !script.row_deletes.is_empty() || !script.section_deletes.is_empty() {
        out.push_str("### Deletes\n\n");
        for at in &script.row_deletes {
            out.push_str(&format!("- row `{at}`\n"));
        }
        for index in &script.section_deletes {
            out.push_str(&format!("- section `{index}`\n"));
        }
        out.push('\n');
    }

    if !script.section_inserts.is_empty() || !script.row_inserts.is_empty() {
        out.push_str("### Inserts\n\n");
        for index in &script.section_inserts {
            out.push_str(&format!("- section `{index}`\n"));
        }
        for at in &script.row_inserts {
            out.push_str(&format!("- row `{at}`\n"));
        }
        out.push('\n');
    }

    if !script.section_moves.is_empty() || !script.row_moves.is_empty() {
        out.push_str("### Moves\n\n");
        for (from, to) in &script.section_moves {
            out.push_str(&format!("- section `{from}` → `{to}`\n"));
        }
        for (from, to) in &script.row_moves {
            out.push_str(&format!("- row `{from}` → `{to}`\n"));
        }
        out.push('\n');
    }

    if !script.row_reloads.is_empty() {
        out.push_str("### Reloads\n\n");
        for at in &script.row_reloads {
            out.push_str(&format!("- row `{at}`\n"));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::RowAddress;

    #[test]
    fn test_empty_script_renders_no_changes() {
        let text = render_summary(&EditScript::default());
        assert!(text.contains("No changes detected"));
    }

    #[test]
    fn test_summary_lists_each_phase() {
        let script = EditScript {
            row_deletes: vec![RowAddress::new(0, 1)],
            section_inserts: vec![2],
            row_moves: vec![(RowAddress::new(0, 0), RowAddress::new(1, 0))],
            row_reloads: vec![RowAddress::new(1, 1)],
            ..Default::default()
        };
        let text = render_summary(&script);
        assert!(text.contains("### Deletes"));
        assert!(text.contains("### Inserts"));
        assert!(text.contains("### Moves"));
        assert!(text.contains("### Reloads"));
        assert!(text.contains("row `(0, 1)`"));
        assert!(text.contains("row `(0, 0)` → `(1, 0)`"));
    }
}
