use super::PrintChild;

/// Lays out `children` under the current line, one per row.
///
/// Trailing `None` entries are dropped; a child rendering to an empty string
/// is drawn as a bare `│`.
pub fn print_tree(tab: &str, children: &[Option<&PrintChild>]) -> String {
    let mut out = String::new();

    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child) in children.iter().enumerate().take(last + 1) {
        let Some(render) = child else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let rendered = render(&child_tab);
        let branch = if rendered.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !rendered.is_empty() {
            out.push(' ');
            out.push_str(&rendered);
        }
    }

    out
}
