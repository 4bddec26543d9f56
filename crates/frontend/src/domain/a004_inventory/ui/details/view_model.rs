use crate::shared::form_vm::{DetailsViewModel, EntityForm};
use contracts::domain::a004_inventory::{ItemInventario, ItemInventarioDto, ItemInventarioForm};

pub type ItemInventarioDetailsViewModel = DetailsViewModel<ItemInventarioForm>;

impl EntityForm for ItemInventarioForm {
    type Entity = ItemInventario;
    type Dto = ItemInventarioDto;

    fn from_entity(entity: &ItemInventario) -> Self {
        ItemInventarioForm::from_entity(entity)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), &'static str> {
        ItemInventarioForm::validate(self)
    }

    fn payload(&self, _usuario_id: Option<i64>) -> Result<ItemInventarioDto, &'static str> {
        Ok(self.to_dto())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_quantity_rejected() {
        let form = ItemInventarioForm {
            nombre: "Guantes".into(),
            cantidad: -1.0,
            ..Default::default()
        };
        assert!(EntityForm::validate(&form).is_err());
    }

    #[test]
    fn test_payload_keeps_numbers() {
        let form = ItemInventarioForm {
            nombre: " Resina ".into(),
            cantidad: 4.0,
            stock_minimo: 2.0,
            precio_unitario: 120.5,
            ..Default::default()
        };
        let dto = form.payload(None).unwrap();
        assert_eq!(dto.nombre, "Resina");
        assert_eq!(dto.precio_unitario, 120.5);
        assert_eq!(dto.fecha_vencimiento, None);
    }
}
