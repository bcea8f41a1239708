/// Slide deck generation. Not implemented yet, the page only announces itself.
pub const TITLE: &str = "📊 一键生成 PPT";

pub fn render() -> String {
    format!("{TITLE}\n该功能尚未开放。")
}
