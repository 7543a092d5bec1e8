//! Common types used across the crate.

str_enum! {
    /// Represents the type of an address or of an address component.
    ///
    /// The set is closed: decoding a response whose `types` array contains
    /// a tag outside this list fails.
    ///
    /// See the [Google Maps Platform documentation][1] for more information.
    ///
    /// [1]: https://developers.google.com/maps/documentation/geocoding/requests-geocoding#Types
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum AddressType {
        AdministrativeAreaLevel1 = "administrative_area_level_1",
        AdministrativeAreaLevel2 = "administrative_area_level_2",
        AdministrativeAreaLevel3 = "administrative_area_level_3",
        AdministrativeAreaLevel4 = "administrative_area_level_4",
        AdministrativeAreaLevel5 = "administrative_area_level_5",
        StreetAddress = "street_address",
        Route = "route",
        Intersection = "intersection",
        Political = "political",
        Country = "country",
        ColloquialArea = "colloquial_area",
        Locality = "locality",
        Sublocality = "sublocality",
        Ward = "ward",
        Neighborhood = "neighborhood",
        Premise = "premise",
        Subpremise = "subpremise",
        PostalCode = "postal_code",
        NaturalFeature = "natural_feature",
        Airport = "airport",
        Park = "park",
        PointOfInterest = "point_of_interest",
        SublocalityLevel1 = "sublocality_level_1",
        SublocalityLevel2 = "sublocality_level_2",
        SublocalityLevel3 = "sublocality_level_3",
        SublocalityLevel4 = "sublocality_level_4",
        SublocalityLevel5 = "sublocality_level_5",
        Floor = "floor",
        Establishment = "establishment",
        Parking = "parking",
        PostBox = "post_box",
        PostalTown = "postal_town",
        Room = "room",
        StreetNumber = "street_number",
        BusStation = "bus_station",
        TrainStation = "train_station",
        TransitStation = "transit_station",
    }
}

str_enum! {
    /// Represents the `location_type` field in geometry results and the
    /// `location_type` filter in reverse geocoding requests.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum LocationType {
        /// A precise geocode.
        Rooftop = "ROOFTOP",
        /// An approximation interpolated between two precise points.
        RangeInterpolated = "RANGE_INTERPOLATED",
        /// The geometric center of a polyline or polygon result.
        GeometricCenter = "GEOMETRIC_CENTER",
        Approximate = "APPROXIMATE",
    }
}

str_enum! {
    /// Represents the `status` field of a geocoding response.
    ///
    /// `UnknownError` doubles as a local placeholder: the client reports it
    /// when the request could not be performed or the response could not be
    /// decoded.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum StatusCode {
        Ok = "OK",
        ZeroResults = "ZERO_RESULTS",
        OverQueryLimit = "OVER_QUERY_LIMIT",
        RequestDenied = "REQUEST_DENIED",
        InvalidRequest = "INVALID_REQUEST",
        UnknownError = "UNKNOWN_ERROR",
    }
}

impl std::fmt::Display for AddressType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        AsRef::<str>::as_ref(self).fmt(f)
    }
}

impl std::fmt::Display for LocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        AsRef::<str>::as_ref(self).fmt(f)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        AsRef::<str>::as_ref(self).fmt(f)
    }
}
