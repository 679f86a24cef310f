//! Deterministic company name generation using curated name lists.
//!
//! Produces Russian-style legal entity names, e.g. `ООО «Северный Трейд»`
//! or `ИП Кузнецов`. All generation is deterministic (same RNG seed = same names).

use crate::rng::StageRng;

/// Deterministic name generator using curated name lists
pub struct NameGenerator;

impl NameGenerator {
    /// Generate a company name: legal form followed by a quoted brand,
    /// or a sole-proprietor name for `ИП`.
    pub fn generate_company_name(rng: &mut StageRng) -> String {
        let form = *rng.choose(Self::legal_forms());
        if form == "ИП" {
            return format!("{} {}", form, rng.choose(Self::surnames()));
        }

        // Three brand shapes, roughly as common as each other.
        let brand = match rng.next_u64_below(3) {
            0 => format!("{} {}", rng.choose(Self::stems()), rng.choose(Self::industries())),
            1 => format!("{} и партнёры", rng.choose(Self::surnames())),
            _ => format!("{}{}", rng.choose(Self::stems()), rng.choose(Self::suffixes())),
        };
        format!("{form} «{brand}»")
    }

    fn legal_forms() -> &'static [&'static str] {
        &["ООО", "ООО", "ООО", "ОАО", "ЗАО", "ЧУП", "ИП", "НПО", "РАО"]
    }

    fn surnames() -> &'static [&'static str] {
        &[
            "Иванов", "Смирнов", "Кузнецов", "Попов", "Васильев", "Петров",
            "Соколов", "Михайлов", "Новиков", "Фёдоров", "Морозов", "Волков",
            "Алексеев", "Лебедев", "Семёнов", "Егоров", "Павлов", "Козлов",
            "Степанов", "Николаев", "Орлов", "Андреев", "Макаров", "Никитин",
            "Захаров", "Зайцев", "Соловьёв", "Борисов", "Яковлев", "Григорьев",
            "Романов", "Воробьёв", "Сергеев", "Кузьмин", "Фролов", "Александров",
            "Дмитриев", "Королёв", "Гусев", "Киселёв", "Ильин", "Максимов",
            "Поляков", "Сорокин", "Виноградов", "Ковалёв", "Белов", "Медведев",
            "Антонов", "Тарасов", "Жуков", "Баранов", "Филиппов", "Комаров",
        ]
    }

    fn stems() -> &'static [&'static str] {
        &[
            "Север", "Юг", "Восток", "Запад", "Альфа", "Вектор", "Гранит",
            "Спектр", "Орион", "Меридиан", "Полесье", "Неман", "Двина",
            "Берёза", "Сож", "Припять", "Зубр", "Агат", "Кристалл", "Импульс",
            "Стандарт", "Профи", "Техно", "Мега", "Бел", "Старт", "Вега",
        ]
    }

    fn suffixes() -> &'static [&'static str] {
        &["Трейд", "Групп", "Строй", "Снаб", "Торг", "Сервис", "Пром", "Инвест", "Лайн"]
    }

    fn industries() -> &'static [&'static str] {
        &[
            "Логистик", "Строймаш", "Электро", "Агро", "Металл", "Энерго",
            "Инструмент", "Комплект", "Оптторг", "Маркет", "Системс", "Холдинг",
        ]
    }
}
