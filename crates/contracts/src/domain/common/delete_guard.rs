/// Запрет жёсткого удаления записи, на которую ссылаются другие.
///
/// Флаги связей приходят с бэкенда вместе с записью; клиент их только
/// показывает и ничего не перепроверяет сам.
pub trait DeleteGuard {
    /// Текст причины, если удалять нельзя
    fn delete_blocked_reason(&self) -> Option<&'static str>;

    fn can_delete(&self) -> bool {
        self.delete_blocked_reason().is_none()
    }
}

pub fn linked_records_reason(tiene_pagos: bool, tiene_historia_clinica: bool) -> Option<&'static str> {
    match (tiene_pagos, tiene_historia_clinica) {
        (true, true) => Some("No se puede eliminar: tiene pagos e historia clínica asociados"),
        (true, false) => Some("No se puede eliminar: tiene pagos asociados"),
        (false, true) => Some("No se puede eliminar: tiene historia clínica asociada"),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linked_records_reason() {
        assert!(linked_records_reason(false, false).is_none());
        assert!(linked_records_reason(true, false).unwrap().contains("pagos"));
        assert!(linked_records_reason(false, true).unwrap().contains("historia"));
    }
}
