use base64::{Engine, engine::general_purpose::STANDARD};
use sha2::{Digest, Sha256};

pub const SVG_MIME: &str = "image/svg+xml";
pub const PNG_MIME: &str = "image/png";

/// 生成占位插图，返回内嵌 SVG 的 data URI
///
/// 纯函数，不访问网络；prompt 只在远程生成时使用。
pub fn generate_illustration(_prompt: &str, topic: &str) -> String {
    to_data_uri(SVG_MIME, create_placeholder_svg(topic).as_bytes())
}

pub fn create_placeholder_svg(topic: &str) -> String {
    format!(
        r##"<svg width="400" height="300" xmlns="http://www.w3.org/2000/svg">
    <rect width="400" height="300" fill="#f0f0f0" stroke="#ddd"/>
    <text x="200" y="150" text-anchor="middle" fill="#666" font-size="16">
        Hình minh họa cho: {}
    </text>
    <text x="200" y="180" text-anchor="middle" fill="#999" font-size="12">
        (Sẽ được tạo bằng AI)
    </text>
</svg>"##,
        escape_xml(topic)
    )
}

/// 默认的插图提示词
pub fn default_prompt(topic: &str) -> String {
    format!("educational illustration for {topic}")
}

pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// 解析 base64 data URI，返回 (mime, 字节)
pub fn decode_data_uri(uri: &str) -> Option<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime.to_string(), bytes))
}

/// 插图文件名：prompt 和 topic 各自带长度前缀后取 sha256，再加上按 mime 推断的扩展名
pub fn image_file_name(prompt: &str, topic: &str, mime: &str) -> String {
    let mut hasher = Sha256::new();
    for field in [prompt, topic] {
        hasher.update((field.len() as u64).to_be_bytes());
        hasher.update(field.as_bytes());
    }
    let digest = hasher.finalize();

    let extension = match mime {
        SVG_MIME => "svg",
        PNG_MIME => "png",
        _ => "bin",
    };
    format!("{digest:x}.{extension}")
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illustration_embeds_topic_in_svg() {
        let uri = generate_illustration("a prompt", "Định lý Pythagoras");
        assert!(uri.starts_with("data:image/svg+xml;base64,"));

        let (mime, bytes) = decode_data_uri(&uri).unwrap();
        assert_eq!(mime, SVG_MIME);
        let svg = String::from_utf8(bytes).unwrap();
        assert!(svg.contains("Hình minh họa cho: Định lý Pythagoras"));
        assert!(svg.contains("(Sẽ được tạo bằng AI)"));
    }

    #[test]
    fn illustration_is_deterministic_and_ignores_prompt() {
        assert_eq!(
            generate_illustration("one", "Nước"),
            generate_illustration("two", "Nước")
        );
    }

    #[test]
    fn topic_markup_is_escaped() {
        let svg = create_placeholder_svg("<b>a & b</b>");
        assert!(svg.contains("&lt;b&gt;a &amp; b&lt;/b&gt;"));
        assert!(!svg.contains("<b>"));
    }

    #[test]
    fn image_file_names_are_content_addressed() {
        let svg = image_file_name("p", "Nước", SVG_MIME);
        assert!(svg.ends_with(".svg"));
        assert_eq!(svg.len(), 64 + 4);
        assert_eq!(svg, image_file_name("p", "Nước", SVG_MIME));
        assert_ne!(svg, image_file_name("q", "Nước", SVG_MIME));
        assert!(image_file_name("p", "Nước", PNG_MIME).ends_with(".png"));
    }

    #[test]
    fn shifted_field_boundaries_give_distinct_names() {
        assert_ne!(
            image_file_name("a|b", "c", SVG_MIME),
            image_file_name("a", "b|c", SVG_MIME)
        );
        assert_ne!(
            image_file_name("ab", "c", SVG_MIME),
            image_file_name("a", "bc", SVG_MIME)
        );
    }

    #[test]
    fn malformed_data_uri_is_rejected() {
        assert!(decode_data_uri("image/svg+xml;base64,AAAA").is_none());
        assert!(decode_data_uri("data:image/png,AAAA").is_none());
        assert!(decode_data_uri("data:image/png;base64,***").is_none());
    }
}
