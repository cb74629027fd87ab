/// Targets of every anchor in `html`, in document order
pub fn link_targets(html: &str) -> Vec<String> {
    html.match_indices("<a ")
        .filter_map(|(start, _)| {
            let tag = &html[start..];
            let tag = &tag[..tag.find('>')?];
            let href = tag.find("href=\"")? + "href=\"".len();
            let end = tag[href..].find('"')?;
            Some(tag[href..href + end].to_string())
        })
        .collect()
}
