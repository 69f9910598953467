use crate::config::toml_config::ImageConfig;
use crate::core::text;
use crate::domain::model::{FloorResponse, Listing, Marketplace, SelectOption};
use crate::domain::ports::Dropdown;

const TONNEL_LOGO: &str = r##"<svg class="marketplace-logo" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 18c-4.41 0-8-3.59-8-8s3.59-8 8-8 8 3.59 8 8-3.59 8-8 8z" fill="#9d8fff"/><path d="M12 7h-1v10h2v-4h2v-2h-2V7z" fill="#9d8fff"/></svg>"##;
const PORTALS_LOGO: &str = r##"<svg class="marketplace-logo" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M12 2a10 10 0 100 20 10 10 0 000-20zm0 18a8 8 0 110-16 8 8 0 010 16z" fill="#9d8fff"/><path d="M12 10a2 2 0 100 4 2 2 0 000-4z" fill="#9d8fff"/></svg>"##;
const MRKT_LOGO: &str = r##"<svg class="marketplace-logo" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path fill-rule="evenodd" clip-rule="evenodd" d="M2 12C2 6.47715 6.47715 2 12 2C17.5228 2 22 6.47715 22 12C22 17.5228 17.5228 22 12 22C6.47715 22 2 17.5228 2 12ZM8 8V16H10V13L12 15L14 13V16H16V8H14L12 10L10 8H8Z" fill="#9d8fff"/></svg>"##;

const PRICE_ICON: &str = r##"<svg class="info-icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M11.99 2C6.47 2 2 6.48 2 12s4.47 10 9.99 10C17.52 22 22 17.52 22 12S17.52 2 11.99 2zM12 16c-0.81 0-1.55-.3-2.11-.89l-1.42 1.42C9.55 17.6 10.74 18 12 18c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4h2c0-1.1.9-2 2-2s2 .9 2 2-.9 2-2 2zm0-8c-.55 0-1 .45-1 1v1h2V9c0-.55-.45-1-1-1z"/></svg>"##;
const LINK_ICON: &str = r##"<svg class="info-icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M10.59 13.41c.44-.39.44-1.03 0-1.42l-4.24-4.24c-1.17-1.17-3.07-1.17-4.24 0-1.17 1.17-1.17 3.07 0 4.24l4.24 4.24c.39.39 1.02.39 1.41 0 .39-.39.39-1.02 0-1.41L5.34 12l2.83-2.83 2.42 2.42zM14.83 7.76l-4.24-4.24c-1.17-1.17-3.07-1.17-4.24 0L4.93 4.93c-1.17 1.17-1.17 3.07 0 4.24l4.24 4.24c1.17 1.17 3.07 1.17 4.24 0l1.41-1.41c1.17-1.17 1.17-3.07 0-4.24zm-1.41-1.41l1.41 1.41c.39.39.39 1.02 0 1.41l-4.24 4.24c-.39.39-1.02.39-1.41 0-.39-.39-.39-1.02 0-1.41l4.24-4.24c.39-.39 1.02-.39 1.41 0z"/></svg>"##;

/// 系列名稱轉 slug：轉小寫並移除 `[a-z0-9]` 以外的所有字元
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn logo(marketplace: Marketplace) -> &'static str {
    match marketplace {
        Marketplace::Tonnel => TONNEL_LOGO,
        Marketplace::Portals => PORTALS_LOGO,
        Marketplace::Mrkt => MRKT_LOGO,
    }
}

/// 圖片 CDN 的網址規則。網址不做驗證，載入失敗時圖片自行隱藏
#[derive(Debug, Clone)]
pub struct ImageUrls {
    collection_thumb_base: String,
    listing_image_base: String,
}

impl ImageUrls {
    pub fn new(config: &ImageConfig) -> Self {
        Self {
            collection_thumb_base: config.collection_thumb_base.trim_end_matches('/').to_string(),
            listing_image_base: config.listing_image_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn collection_thumb(&self, collection: &str) -> String {
        format!("{}/{}/thumb.webp", self.collection_thumb_base, slug(collection))
    }

    pub fn listing_image(&self, collection: &str, listing: &Listing) -> String {
        format!(
            "{}/{}-{}.large.jpg",
            self.listing_image_base,
            slug(collection),
            listing.tg_id
        )
    }
}

impl Default for ImageUrls {
    fn default() -> Self {
        Self::new(&ImageConfig::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResultRenderer {
    images: ImageUrls,
}

impl ResultRenderer {
    pub fn new(images: ImageUrls) -> Self {
        Self { images }
    }

    pub fn images(&self) -> &ImageUrls {
        &self.images
    }

    /// 三個市集都沒有結果時只輸出一行訊息；否則依固定順序每個市集一張卡片
    pub fn render(&self, payload: &FloorResponse, collection: &str) -> String {
        if payload.is_empty() {
            return text::NOTHING_FOUND_HTML.to_string();
        }

        let cards: String = Marketplace::ALL
            .iter()
            .map(|m| self.render_card(*m, payload.get(*m), collection))
            .collect();

        format!("<div class=\"results-grid\">{}</div>", cards)
    }

    pub fn render_card(
        &self,
        marketplace: Marketplace,
        listing: Option<&Listing>,
        collection: &str,
    ) -> String {
        let name = marketplace.display_name();
        let logo = logo(marketplace);

        let Some(listing) = listing else {
            return format!(
                concat!(
                    "<div class=\"result-card not-found\">",
                    "<div class=\"result-card-header\"><h2>{logo} {name}</h2></div>",
                    "<div class=\"result-card-content\"><p>{message}</p></div>",
                    "</div>"
                ),
                logo = logo,
                name = name,
                message = text::NOT_FOUND_ON_MARKETPLACE,
            );
        };

        let image_url = self.images.listing_image(collection, listing);

        format!(
            concat!(
                "<div class=\"result-card\">",
                "<div class=\"result-card-header\">",
                "<img src=\"{image}\" alt=\"{alt}\" class=\"result-gift-image\" ",
                "onerror=\"this.style.display='none'; this.parentElement.style.gap='0';\">",
                "<h2>{logo} {name}</h2>",
                "</div>",
                "<div class=\"result-card-content\">",
                "<p>{price_icon}<strong>{price_label}</strong> {price} TON</p>",
                "<p>{link_icon}<strong>{link_label}</strong> ",
                "<a href=\"{link}\" target=\"_blank\" rel=\"noopener noreferrer\">{link_text}</a></p>",
                "</div>",
                "</div>"
            ),
            image = escape_html(&image_url),
            alt = escape_html(collection),
            logo = logo,
            name = name,
            price_icon = PRICE_ICON,
            price_label = text::PRICE_LABEL,
            price = listing.price,
            link_icon = LINK_ICON,
            link_label = text::LINK_LABEL,
            link = escape_html(&listing.link),
            link_text = text::LINK_TEXT,
        )
    }
}

/// 下拉選項（含可選圖示）的 HTML
pub fn render_option(option: &SelectOption) -> String {
    match &option.image_url {
        Some(url) => format!(
            "<div><img src=\"{}\" class=\"dropdown-gift-icon\" alt=\"\" onerror=\"this.style.display='none'\">{}</div>",
            escape_html(url),
            escape_html(&option.text)
        ),
        None => format!("<div>{}</div>", escape_html(&option.text)),
    }
}

/// 下拉選單目前的選項列表，略過值為空的預設選項
pub fn render_dropdown(dropdown: &dyn Dropdown) -> String {
    let items: String = dropdown
        .options()
        .iter()
        .filter(|o| !o.value.is_empty())
        .map(render_option)
        .collect();

    format!(
        "<div class=\"dropdown-options\" id=\"{}\">{}</div>",
        escape_html(dropdown.id()),
        items
    )
}

/// CLI 輸出：`html` 時輸出帶圖示的選項，否則每行一個名稱（附稀有度）
pub fn format_options(dropdown: &dyn Dropdown, html: bool) -> String {
    if html {
        return render_dropdown(dropdown);
    }

    dropdown
        .options()
        .into_iter()
        .filter(|o| !o.value.is_empty())
        .map(|o| match o.rarity {
            Some(rarity) => format!("  {} ({})", o.text, rarity),
            None => format!("  {}", o.text),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_error(message: &str) -> String {
    format!(
        "<p style=\"color: #ff4d4d;\">{} {}</p>",
        text::ERROR_PREFIX,
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ListingId;

    fn listing(price: f64, tg_id: u64) -> Listing {
        Listing {
            price,
            link: format!("https://t.me/market/{}", tg_id),
            tg_id: ListingId::Number(tg_id.into()),
        }
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Plush Pepe #12"), "plushpepe12");
        assert_eq!(slug("B-Day Candle"), "bdaycandle");
        assert_eq!(slug("Jack-in-the-Box"), "jackinthebox");
        assert_eq!(slug(""), "");
        assert_eq!(slug("Ёлка 2024"), "2024");
    }

    #[test]
    fn test_all_absent_renders_only_nothing_found() {
        let renderer = ResultRenderer::default();
        let html = renderer.render(&FloorResponse::default(), "Plush Pepe");

        assert_eq!(html, text::NOTHING_FOUND_HTML);
        assert!(!html.contains("result-card"));
    }

    #[test]
    fn test_only_tonnel_renders_one_found_two_not_found_in_order() {
        let renderer = ResultRenderer::default();
        let payload = FloorResponse {
            tonnel: Some(listing(12.5, 4821)),
            ..Default::default()
        };

        let html = renderer.render(&payload, "Plush Pepe");

        assert_eq!(html.matches("class=\"result-card\"").count(), 1);
        assert_eq!(html.matches("class=\"result-card not-found\"").count(), 2);

        let tonnel = html.find("Tonnel").unwrap();
        let portals = html.find("Portals").unwrap();
        let mrkt = html.find("MRKT").unwrap();
        assert!(tonnel < portals && portals < mrkt);

        assert!(html.contains("12.5 TON"));
        assert!(html.contains("https://nft.fragment.com/gift/plushpepe-4821.large.jpg"));
    }

    #[test]
    fn test_order_is_fixed_not_by_price() {
        let renderer = ResultRenderer::default();
        let payload = FloorResponse {
            tonnel: Some(listing(300.0, 1)),
            portals: Some(listing(100.0, 2)),
            mrkt: Some(listing(200.0, 3)),
        };

        let html = renderer.render(&payload, "Jelly Bunny");

        let first = html.find("300 TON").unwrap();
        let second = html.find("100 TON").unwrap();
        let third = html.find("200 TON").unwrap();
        assert!(first < second && second < third);
        assert!(!html.contains("not-found"));
    }

    #[test]
    fn test_empty_collection_name_still_renders_card() {
        let renderer = ResultRenderer::default();
        let payload = FloorResponse {
            mrkt: Some(listing(5.0, 9)),
            ..Default::default()
        };

        let html = renderer.render(&payload, "");

        assert!(html.contains("https://nft.fragment.com/gift/-9.large.jpg"));
        assert!(html.contains("5 TON"));
    }

    #[test]
    fn test_link_and_name_are_escaped() {
        let renderer = ResultRenderer::default();
        let mut found = listing(1.0, 1);
        found.link = "https://t.me/x?a=1&b=\"2\"".to_string();

        let html = renderer.render_card(Marketplace::Portals, Some(&found), "<script>");

        assert!(html.contains("href=\"https://t.me/x?a=1&amp;b=&quot;2&quot;\""));
        assert!(html.contains("alt=\"&lt;script&gt;\""));
    }

    #[test]
    fn test_collection_thumb_url() {
        let images = ImageUrls::default();
        assert_eq!(
            images.collection_thumb("Plush Pepe"),
            "https://fragment.com/file/gifts/plushpepe/thumb.webp"
        );
    }

    #[test]
    fn test_render_option_with_and_without_image() {
        let mut option = SelectOption::plain("Ninja Mike");
        assert_eq!(render_option(&option), "<div>Ninja Mike</div>");

        option.image_url = Some("https://cdn/m.png".to_string());
        let html = render_option(&option);
        assert!(html.contains("src=\"https://cdn/m.png\""));
        assert!(html.contains("onerror=\"this.style.display='none'\""));
    }

    #[test]
    fn test_format_options_skips_default_and_shows_images() {
        use crate::adapters::ui::MemoryDropdown;

        let dropdown = MemoryDropdown::new("model-select", "");
        dropdown.add_option(SelectOption::plain(""));
        dropdown.add_option(SelectOption {
            image_url: Some("https://cdn/frozen.png".to_string()),
            rarity: Some("20‰".to_string()),
            ..SelectOption::plain("Frozen")
        });
        dropdown.add_option(SelectOption::plain("Cozy Galaxy"));

        let html = format_options(&dropdown, true);
        assert_eq!(
            html,
            concat!(
                "<div class=\"dropdown-options\" id=\"model-select\">",
                "<div><img src=\"https://cdn/frozen.png\" class=\"dropdown-gift-icon\" alt=\"\" ",
                "onerror=\"this.style.display='none'\">Frozen</div>",
                "<div>Cozy Galaxy</div>",
                "</div>"
            )
        );

        let text = format_options(&dropdown, false);
        assert_eq!(text, "  Frozen (20‰)\n  Cozy Galaxy");
    }

    #[test]
    fn test_render_error_escapes_message() {
        assert_eq!(
            render_error("a < b"),
            "<p style=\"color: #ff4d4d;\">Ошибка: a &lt; b</p>"
        );
    }
}
