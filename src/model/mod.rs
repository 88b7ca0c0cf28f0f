//! # Reservation Model
//!
//! The input records for the composer. A reservation is produced whole by the
//! booking form and handed over for one build; the engine never mutates it.
//!
//! Field names are English, but the JSON keys are the ones the booking form
//! persists (Spanish camelCase), so stored reservations deserialize as-is.
//! Every list defaults to empty and every optional string may be absent or
//! blank. Renderers treat both the same way through [`present`].

use serde::{Deserialize, Serialize};

/// Returns the trimmed value when the field carries actual text.
pub fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// One travel booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "codigoReserva")]
    pub code: String,
    #[serde(rename = "fechaCreacion")]
    pub created_on: String,
    #[serde(rename = "nombreCliente")]
    pub client_name: String,
    #[serde(rename = "documentoCliente")]
    pub client_document: String,
    #[serde(rename = "telefonoResponsable", default)]
    pub client_phone: Option<String>,

    #[serde(rename = "cantidadAdultos", default = "default_adults")]
    pub adults: u32,
    #[serde(rename = "cantidadNinos", default)]
    pub children: u32,

    #[serde(rename = "pasajeros", default)]
    pub passengers: Vec<Passenger>,

    #[serde(rename = "fechaInicioViaje")]
    pub trip_start: String,
    #[serde(rename = "fechaFinViaje")]
    pub trip_end: String,

    #[serde(rename = "destinos", default)]
    pub destinations: Vec<Destination>,
    #[serde(rename = "vuelos", default)]
    pub flights: Vec<Flight>,

    #[serde(rename = "incluye", default)]
    pub includes: Vec<String>,
    #[serde(rename = "noIncluye", default)]
    pub excludes: Vec<String>,

    #[serde(rename = "terminosCondicionesUrl", default)]
    pub terms_url: Option<String>,
    #[serde(rename = "precioTotal", default)]
    pub total_price: Option<String>,
    #[serde(rename = "abono", default)]
    pub deposit: Option<String>,
    #[serde(rename = "saldoPendiente", default)]
    pub balance: Option<String>,
    #[serde(rename = "fechaPlazoPago", default)]
    pub payment_deadline: Option<String>,

    #[serde(rename = "notasGenerales", default)]
    pub notes: Option<String>,
}

fn default_adults() -> u32 {
    1
}

impl Reservation {
    /// Tours summed across every destination.
    pub fn tour_count(&self) -> usize {
        self.destinations.iter().map(|d| d.tours.len()).sum()
    }
}

/// One traveler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Passenger {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "numeroDocumento")]
    pub document: String,
    #[serde(rename = "fechaNacimiento", default)]
    pub birth_date: String,
}

/// One stop on the itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Destination {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "numero")]
    pub sequence: u32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "pais", default = "default_country")]
    pub country: String,
    #[serde(rename = "fechaInicio")]
    pub start: String,
    #[serde(rename = "fechaFin")]
    pub end: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "puntosInteres", default)]
    pub points_of_interest: Vec<String>,
    #[serde(rename = "imagenBanner", default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub hotel: Option<Hotel>,
    #[serde(default)]
    pub tours: Vec<Tour>,
    #[serde(rename = "traslados", default)]
    pub transfers: Vec<Transfer>,
}

fn default_country() -> String {
    "Colombia".to_string()
}

/// Lodging at a destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "numeroReserva", default)]
    pub reservation_number: Option<String>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub hora_check_in: Option<String>,
    #[serde(default)]
    pub hora_check_out: Option<String>,
    #[serde(rename = "noches", default = "default_one")]
    pub nights: u32,
    #[serde(rename = "numeroHabitaciones", default = "default_one")]
    pub rooms: u32,
    #[serde(rename = "tipoHabitacion", default)]
    pub room_type: Option<String>,
    #[serde(rename = "planAlimentacion", default)]
    pub meal_plan: Option<String>,
    #[serde(rename = "fotos", default)]
    pub photos: Vec<String>,
    #[serde(rename = "notas", default)]
    pub notes: Option<String>,
}

fn default_one() -> u32 {
    1
}

impl Default for Hotel {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            address: None,
            phone: None,
            reservation_number: None,
            check_in: None,
            check_out: None,
            hora_check_in: None,
            hora_check_out: None,
            nights: 1,
            rooms: 1,
            room_type: None,
            meal_plan: None,
            photos: Vec::new(),
            notes: None,
        }
    }
}

/// An excursion at a destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tour {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "operador", default)]
    pub operator: Option<String>,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "duracion", default)]
    pub duration: Option<String>,
    #[serde(rename = "horaInicio", default)]
    pub start_time: Option<String>,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "incluye", default)]
    pub includes: Vec<String>,
    #[serde(rename = "noIncluye", default)]
    pub excludes: Vec<String>,
}

/// A ground transport leg.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transfer {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "tipo")]
    pub vehicle: String,
    #[serde(rename = "desde")]
    pub from: String,
    #[serde(rename = "hasta")]
    pub to: String,
    #[serde(rename = "horaRecogida", default)]
    pub pickup_time: Option<String>,
    #[serde(rename = "imagenVehiculo", default)]
    pub vehicle_image: Option<String>,
    #[serde(rename = "notas", default)]
    pub notes: Option<String>,
}

/// One flight segment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Flight {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "aerolinea")]
    pub airline: String,
    #[serde(rename = "codigoReserva")]
    pub reservation_code: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "salidaAeropuerto")]
    pub departure_airport: String,
    #[serde(rename = "salidaHora")]
    pub departure_time: String,
    #[serde(rename = "llegadaAeropuerto")]
    pub arrival_airport: String,
    #[serde(rename = "llegadaHora")]
    pub arrival_time: String,
    #[serde(rename = "duracion", default)]
    pub duration: Option<String>,
    #[serde(rename = "escalas", default)]
    pub stops: u32,
    #[serde(rename = "logoAerolinea", default)]
    pub airline_logo: Option<String>,
    #[serde(rename = "equipajeFacturado", default)]
    pub checked_baggage: Option<String>,
    #[serde(rename = "notas", default)]
    pub notes: Option<String>,
}

/// Fallback agency name for a missing or blank configuration.
pub const DEFAULT_AGENCY_NAME: &str = "AL Mundo Tours";

/// Issuing agency identity.
///
/// Deserializing merges the stored fields over [`AgencyConfig::default`], so
/// a partial stored config keeps the defaults for whatever it leaves out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgencyConfig {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: Option<String>,
    #[serde(rename = "ciudad")]
    pub city: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    #[serde(rename = "logoUrl")]
    pub logo: Option<String>,
}

impl Default for AgencyConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_AGENCY_NAME.to_string(),
            address: Some("Cra. 5 #10-41, Oficina 501".to_string()),
            city: Some("Bogotá, Colombia".to_string()),
            email: Some("contacto@almundotours.com".to_string()),
            phone: Some("+57 601 234 5678".to_string()),
            logo: Some("/attached_assets/logo_1759463703691.png".to_string()),
        }
    }
}

impl AgencyConfig {
    /// The name to print, falling back to the default agency when blank.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            DEFAULT_AGENCY_NAME
        } else {
            name
        }
    }

    /// Display name with every whitespace run collapsed to `_`.
    ///
    /// The display name is already trimmed, so there is never a leading or
    /// trailing `_`.
    pub fn slug(&self) -> String {
        self.display_name()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
    }
}
