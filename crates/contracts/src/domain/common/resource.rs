use super::Estado;

/// REST-ресурс, который показывает экран списка.
///
/// Константы описывают эндпоинт и вкладку, методы — то, что нужно
/// строке таблицы для действий (id и состояние).
pub trait Resource {
    /// Путь коллекции без базового URL, например `/pacientes`
    const PATH: &'static str;
    /// Ключ вкладки в оболочке приложения
    const KEY: &'static str;
    /// Заголовок списка
    const TITLE: &'static str;
    /// Размер страницы списка
    const PAGE_SIZE: usize = 10;
    /// Удаление через `estado`; `false` — настоящий DELETE
    const SOFT_DELETE: bool = true;

    fn id(&self) -> i64;

    fn estado(&self) -> Option<Estado> {
        None
    }
}
