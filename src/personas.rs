//! Persona catalog for simulated audit sessions.
//!
//! Three static personas cover the educational sites the auditor targets:
//! a current student, a prospective applicant, and a teacher. The catalog
//! is read-only reference data; the natural-language fields are carried in
//! Russian, the language of the audited sites, and consumed verbatim by
//! the simulation LLM.

use crate::models::{DeviceKind, Persona, TechLevel, TimePressure};

/// The full persona catalog.
pub const PERSONAS: &[Persona] = &[
    Persona {
        key: "student",
        name: "Студент",
        name_en: "Student",
        age: 20,
        tech_level: TechLevel::High,
        characteristics: &[
            "Активный пользователь мобильных устройств",
            "Многозадачность и быстрое переключение между разделами",
            "Ограниченное время между парами",
            "Привычка к современным UI паттернам (свайпы, жесты)",
        ],
        goals: &[
            "Быстро найти расписание занятий",
            "Скачать учебные материалы",
            "Сдать домашнее задание онлайн",
            "Проверить оценки и зачетку",
            "Найти контакты преподавателя",
        ],
        pain_points: &[
            "Долгая загрузка на мобильном интернете",
            "Непонятная навигация в личном кабинете",
            "Мелкий текст на мобильных",
            "Отсутствие push-уведомлений",
        ],
        devices: &[DeviceKind::Mobile, DeviceKind::Tablet, DeviceKind::Desktop],
        time_pressure: TimePressure::High,
        system_prompt: "Ты студент, 20 лет. Ты опытный пользователь интернета, активно используешь смартфон. У тебя мало времени между парами, поэтому тебе нужно быстро найти нужную информацию. Ты ожидаешь, что интерфейс будет интуитивным и современным, как в популярных приложениях.",
    },
    Persona {
        key: "applicant",
        name: "Абитуриент",
        name_en: "Applicant",
        age: 17,
        tech_level: TechLevel::Medium,
        characteristics: &[
            "Первый раз на сайте университета",
            "Стресс от выбора будущей профессии",
            "Часто заходит вместе с родителями",
            "Сравнивает несколько университетов",
        ],
        goals: &[
            "Узнать проходные баллы на программу",
            "Посмотреть список вступительных экзаменов",
            "Найти информацию о стоимости обучения",
            "Понять процесс подачи документов",
            "Найти дни открытых дверей",
        ],
        pain_points: &[
            "Слишком много непонятных терминов",
            "Информация раскидана по разным разделам",
            "Нет четкой инструкции 'как поступить'",
            "Устаревшие данные (прошлогодние проходные баллы)",
        ],
        devices: &[DeviceKind::Mobile, DeviceKind::Desktop],
        time_pressure: TimePressure::Medium,
        system_prompt: "Ты абитуриент, 17 лет, выбираешь учебное заведение. Ты впервые на этом сайте и немного волнуешься. Тебе нужна понятная информация о поступлении без сложных терминов. Ты будешь сравнивать эту информацию с другими вариантами.",
    },
    Persona {
        key: "teacher",
        name: "Преподаватель",
        name_en: "Teacher",
        age: 45,
        tech_level: TechLevel::Medium,
        characteristics: &[
            "Использует компьютер в основном для работы",
            "Ценит стабильность и привычные паттерны",
            "Много административной работы",
            "Может работать с планшета в аудитории",
        ],
        goals: &[
            "Загрузить оценки студентов",
            "Опубликовать учебные материалы",
            "Посмотреть список студентов в группе",
            "Забронировать аудиторию",
            "Согласовать расписание консультаций",
        ],
        pain_points: &[
            "Слишком много кликов для простых действий",
            "Непонятная система загрузки файлов",
            "Нет возможности массовых операций",
            "Интерфейс не адаптирован под планшет",
        ],
        devices: &[DeviceKind::Desktop, DeviceKind::Tablet],
        time_pressure: TimePressure::Low,
        system_prompt: "Ты преподаватель, 45 лет. Ты используешь сайт регулярно для работы со студентами и публикации материалов. Ты ценишь эффективность и не любишь, когда интерфейс меняется без причины. Ты хочешь выполнять задачи быстро и без лишних кликов.",
    },
];

/// All personas in catalog order.
pub fn all() -> &'static [Persona] {
    PERSONAS
}

/// Look up a persona by its key.
#[allow(dead_code)] // Used when a single persona is selected for a run
pub fn get(key: &str) -> Option<&'static Persona> {
    PERSONAS.iter().find(|p| p.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_keys() {
        let keys: Vec<&str> = all().iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["student", "applicant", "teacher"]);
    }

    #[test]
    fn test_lookup_by_key() {
        let student = get("student").unwrap();
        assert_eq!(student.name_en, "Student");
        assert_eq!(student.age, 20);
        assert_eq!(student.tech_level, TechLevel::High);
        assert!(get("admin").is_none());
    }

    #[test]
    fn test_trait_data_is_non_empty() {
        for persona in all() {
            assert!(!persona.characteristics.is_empty(), "{}", persona.key);
            assert!(!persona.goals.is_empty(), "{}", persona.key);
            assert!(!persona.pain_points.is_empty(), "{}", persona.key);
            assert!(!persona.devices.is_empty(), "{}", persona.key);
            assert!(!persona.system_prompt.is_empty(), "{}", persona.key);
        }
    }

    #[test]
    fn test_device_coverage() {
        assert!(get("student").unwrap().supports_device(DeviceKind::Mobile));
        assert!(get("teacher").unwrap().supports_device(DeviceKind::Tablet));
        assert!(!get("teacher").unwrap().supports_device(DeviceKind::Mobile));
    }
}
