use sui_json_rpc_types::ObjectChange;
use sui_types::base_types::ObjectID;

/// Find the first created or mutated object whose type tag ends with
/// `type_suffix` (e.g. `::water_cooler::WaterCooler`).
///
/// `None` means the transaction did not touch an object of that type; the
/// caller decides whether that is fatal.
pub fn find_object_id(changes: &[ObjectChange], type_suffix: &str) -> Option<ObjectID> {
    changes.iter().find_map(|change| match change {
        ObjectChange::Created {
            object_type,
            object_id,
            ..
        }
        | ObjectChange::Mutated {
            object_type,
            object_id,
            ..
        } if object_type.to_string().ends_with(type_suffix) => Some(*object_id),
        _ => None,
    })
}
