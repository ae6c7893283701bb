//! Column names used across the four datasets.

pub const KOMODITAS: &str = "Komoditas";
pub const SATPEL: &str = "Satpel";
pub const DAERAH_ASAL: &str = "Daerah Asal";
pub const DAERAH_TUJUAN: &str = "Daerah Tujuan";
pub const TUJUAN: &str = "Tujuan";
pub const PROVINSI: &str = "Provinsi";
pub const PULAU: &str = "Pulau";
pub const PEMOHON: &str = "Pemohon";
pub const NEGARA_ASAL: &str = "Negara Asal";
pub const PELABUHAN_MASUK: &str = "Pelabuhan Masuk";

pub const KLASIFIKASI: &str = "Klasifikasi";
pub const NAMA_TERCETAK: &str = "Nama Tercetak";
pub const KODE_HS: &str = "Kode HS";

/// Placeholder written into optional columns the source file does not carry.
pub const MISSING_PLACEHOLDER: &str = "-";

/// Label of the count column in rendered and exported frequency tables.
pub const FREKUENSI: &str = "Frekuensi";

/// Classification metadata that may accompany a commodity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalColumn {
    pub name: &'static str,
    pub default: &'static str,
}

pub const OPTIONAL_COLUMNS: [OptionalColumn; 3] = [
    OptionalColumn {
        name: KLASIFIKASI,
        default: MISSING_PLACEHOLDER,
    },
    OptionalColumn {
        name: NAMA_TERCETAK,
        default: MISSING_PLACEHOLDER,
    },
    OptionalColumn {
        name: KODE_HS,
        default: MISSING_PLACEHOLDER,
    },
];

/// Canonical comparison form of a cell: trimmed and upper-cased.
///
/// Applying it twice yields the same text as applying it once.
pub fn normalize_value(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_value_trims_and_uppercases() {
        assert_eq!(normalize_value("  buah durian "), "BUAH DURIAN");
        assert_eq!(normalize_value("\tKopi\n"), "KOPI");
        assert_eq!(normalize_value(""), "");
    }

    #[test]
    fn normalize_value_is_idempotent() {
        let once = normalize_value(" Ikan Tuna Segar ");
        assert_eq!(normalize_value(&once), once);
    }
}
