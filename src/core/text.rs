//! 介面文字。產品面向俄語使用者，所有顯示字串集中在這裡。

pub const LOADING_COLLECTIONS: &str = "Загрузка коллекций...";
pub const CHOOSE_COLLECTION: &str = "Выберите коллекцию";
pub const SELECT_COLLECTION_FIRST: &str = "Сначала выберите коллекцию";
pub const LOADING: &str = "Загрузка...";
pub const ERROR_LOADING: &str = "Ошибка загрузки";
pub const ERROR_LOADING_COLLECTIONS: &str = "Ошибка загрузки коллекций";

pub const ANY_MODEL: &str = "Любая модель";
pub const ANY_BACKDROP: &str = "Любой фон";
pub const ANY_SYMBOL: &str = "Любой символ";

pub const WELCOME_HTML: &str =
    "<p>Выберите параметры и нажмите \"Найти Floor\", чтобы увидеть результат.</p>";
pub const SELECT_COLLECTION_PROMPT_HTML: &str =
    "<p>Пожалуйста, выберите коллекцию для поиска.</p>";
pub const LOADER_HTML: &str = "<div class=\"loader\"></div>";
pub const NOTHING_FOUND_HTML: &str = "<p>Ничего не найдено ни на одной из площадок.</p>";

pub const NOT_FOUND_ON_MARKETPLACE: &str = "По вашему запросу ничего не найдено.";
pub const PRICE_LABEL: &str = "Цена:";
pub const LINK_LABEL: &str = "Ссылка:";
pub const LINK_TEXT: &str = "Перейти к лоту";
pub const ERROR_PREFIX: &str = "Ошибка:";
