use booblie_config::{
    Config, Formatters, HomepagePostIntroType, Labels, LocaleTag, Translations,
};

static SITE: once_cell::sync::Lazy<Config> = once_cell::sync::Lazy::new(booblie);

/// The site record, built on first use and shared for the rest of the process.
pub fn site() -> &'static Config {
    &SITE
}

pub fn booblie() -> Config {
    let lang = LocaleTag::parse("pt-BR").expect("valid locale tag");

    let labels = Labels {
        available_rss_feeds: "RSS Feeds".to_owned(),
        newer: "Página anterior".to_owned(),
        older: "Próxima página".to_owned(),
        read_more: "Continue lendo".to_owned(),
        rss_feed: "Feed".to_owned(),
        rss_feeds: "Feeds".to_owned(),
        see_all_posts: "Todas as receitas".to_owned(),
    };
    let translations: Translations = [(lang.clone(), labels)].into_iter().collect();

    Config {
        title: "Booblie".to_owned(),
        url: "https://booblie.netlify.app".to_owned(),
        source_directory: "./src/recipes".into(),
        output_directory: "./dist".into(),
        lang,
        homepage_post_intro_type: Some(HomepagePostIntroType::Description),
        translations,
        formatters: Formatters::with_date(crate::format_added_on),
    }
}
