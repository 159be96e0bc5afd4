//! Общие типы для backend и клиентов: идентичность сценария,
//! контент страницы, каталог словаря.

pub mod shared;
pub mod usecases;
