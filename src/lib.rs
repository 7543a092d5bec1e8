#![doc(html_root_url = "https://docs.rs/google-geocode/0.1.0")]

/*!
# Google Geocode

A client library for the Google Maps Geocoding API.

## Usage

Add `google-geocode` to your dependencies in your project's `Cargo.toml`:

```toml
[dependencies]
google-geocode = "0.1"
tokio = { version = "1", features = ["macros"] }
```

## Overview

Here is a basic example that forward-geocodes an address and prints the
formatted result:

```rust,no_run
use google_geocode::Geocoder;

# #[tokio::main]
# async fn main() {
let geocoder = Geocoder::new("api_key");

let response = geocoder.geocode("1600 Amphitheatre Parkway").send().await;
for address in response.results.unwrap_or_default() {
    println!("{:?}", address.formatted_address);
}
# }
```

Every request completes with a [`Response`]: a failure to reach the API or to
decode its reply is reported as a `Response` with
[`StatusCode::UnknownError`](types::StatusCode::UnknownError) rather than as
an error value.
*/

#[cfg(feature = "hyper")]
extern crate hyper_pkg;

#[macro_use]
mod util;

pub mod address;
pub mod response;
pub mod types;

pub use crate::address::{Address, Component, Coordinate, Geometry, ViewPort};
pub use crate::response::Response;
pub use crate::types::{AddressType, LocationType, StatusCode};

use std::borrow::Borrow;
use std::str;

use bytes::Bytes;
use futures_util::future;
use futures_util::TryStreamExt;
use http::{Request, Uri};
use http_body::Body;
use tower_service::Service;

use crate::util::{percent_encode, pipe_join, HttpBodyAsStream};

const ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// A client for the Google Maps Geocoding API.
///
/// The client holds the configuration shared by every request: the API key,
/// the geocode endpoint and the response language. The HTTP round-trip
/// itself is delegated to an HTTP client passed to the request's
/// `send_with_client` method, or to a default `hyper` client via `send`.
///
/// ## Example
///
/// ```rust,no_run
/// use google_geocode::Geocoder;
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut geocoder = Geocoder::new("api_key");
/// geocoder.language("de");
///
/// let response = geocoder.geocode("Unter den Linden 77, Berlin").send().await;
/// # let _ = response;
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Geocoder<K = String> {
    api_key: K,
    endpoint: &'static str,
    language: String,
}

/// A request to the forward geocoding endpoint, built from an address string.
///
/// See the [Google Maps Platform documentation][1] for more information.
///
/// [1]: https://developers.google.com/maps/documentation/geocoding/requests-geocoding
#[derive(Clone, Debug)]
pub struct ForwardGeocode<'a, K = String> {
    geocoder: &'a Geocoder<K>,
    address: &'a str,
    bounds: Option<&'a ViewPort>,
}

/// A request to the forward geocoding endpoint, built from a place ID.
///
/// See the [Google Maps Platform documentation][1] for more information.
///
/// [1]: https://developers.google.com/maps/documentation/geocoding/requests-geocoding
#[derive(Clone, Debug)]
pub struct PlaceGeocode<'a, K = String> {
    geocoder: &'a Geocoder<K>,
    place_id: &'a str,
}

/// A request to the reverse geocoding endpoint, built from a coordinate.
///
/// See the [Google Maps Platform documentation][1] for more information.
///
/// [1]: https://developers.google.com/maps/documentation/geocoding/requests-reverse-geocoding
#[derive(Clone, Debug)]
pub struct ReverseGeocode<'a, K = String> {
    geocoder: &'a Geocoder<K>,
    coordinate: Coordinate,
    result_types: &'a [AddressType],
    location_types: &'a [LocationType],
}

impl<K: Borrow<str>> Geocoder<K> {
    /// Creates a client that authenticates with `api_key` and requests
    /// responses in English.
    pub fn new(api_key: K) -> Self {
        Geocoder {
            api_key,
            endpoint: ENDPOINT,
            language: "en".to_owned(),
        }
    }

    /// Reset the language in which to return results.
    pub fn language(&mut self, language: impl Into<String>) -> &mut Self {
        self.language = language.into();
        self
    }

    /// Create a forward geocoding request for `address`.
    pub fn geocode<'a>(&'a self, address: &'a str) -> ForwardGeocode<'a, K> {
        ForwardGeocode {
            geocoder: self,
            address,
            bounds: None,
        }
    }

    /// Create a forward geocoding request for a place ID obtained from this
    /// or another Google API.
    pub fn geocode_place_id<'a>(&'a self, place_id: &'a str) -> PlaceGeocode<'a, K> {
        PlaceGeocode {
            geocoder: self,
            place_id,
        }
    }

    /// Create a reverse geocoding request for `coordinate`.
    pub fn reverse_geocode(&self, coordinate: Coordinate) -> ReverseGeocode<'_, K> {
        ReverseGeocode {
            geocoder: self,
            coordinate,
            result_types: &[],
            location_types: &[],
        }
    }

    fn base_query(&self) -> String {
        format!(
            "key={}&language={}",
            percent_encode(self.api_key.borrow()),
            percent_encode(&self.language),
        )
    }
}

impl<'a, K: Borrow<str>> ForwardGeocode<'a, K> {
    /// Set a viewport to bias the results towards, encoded as the `bounds`
    /// parameter.
    pub fn bounds(&mut self, bounds: impl Into<Option<&'a ViewPort>>) -> &mut Self {
        self.bounds = bounds.into();
        self
    }

    /// Perform the request with a default `hyper` client.
    ///
    /// # Panics
    ///
    /// This will panic if the underlying HTTPS connector failed to
    /// initialize.
    #[cfg(feature = "hyper")]
    pub async fn send(&self) -> Response {
        let conn = hyper_tls::HttpsConnector::new();
        self.send_with_client(hyper_pkg::Client::builder().build::<_, hyper_pkg::Body>(conn))
            .await
    }

    /// Same as `send` except that it uses `client` to make the HTTP request
    /// to the endpoint.
    ///
    /// # Panics
    ///
    /// This will call `<S as Service>::call` without checking for
    /// `<S as Service>::poll_ready` and may cause a panic if `client` is not
    /// ready to send an HTTP request yet.
    pub async fn send_with_client<S, ReqB, ResB>(&self, client: S) -> Response
    where
        S: Service<Request<ReqB>, Response = http::Response<ResB>>,
        ReqB: Default,
        ResB: Body<Data = Bytes>,
    {
        let mut uri = format!(
            "{}?address={}&{}",
            self.geocoder.endpoint,
            percent_encode(self.address),
            self.geocoder.base_query(),
        );
        if let Some(bounds) = self.bounds {
            let value = format!(
                "{},{}|{},{}",
                bounds.northeast.latitude,
                bounds.northeast.longitude,
                bounds.southwest.latitude,
                bounds.southwest.longitude,
            );
            uri.push_str(&format!("&bounds={}", percent_encode(&value)));
        }

        request(uri, client).await
    }
}

impl<'a, K: Borrow<str>> PlaceGeocode<'a, K> {
    /// Perform the request with a default `hyper` client.
    ///
    /// # Panics
    ///
    /// This will panic if the underlying HTTPS connector failed to
    /// initialize.
    #[cfg(feature = "hyper")]
    pub async fn send(&self) -> Response {
        let conn = hyper_tls::HttpsConnector::new();
        self.send_with_client(hyper_pkg::Client::builder().build::<_, hyper_pkg::Body>(conn))
            .await
    }

    /// Same as `send` except that it uses `client` to make the HTTP request
    /// to the endpoint.
    ///
    /// # Panics
    ///
    /// This will call `<S as Service>::call` without checking for
    /// `<S as Service>::poll_ready` and may cause a panic if `client` is not
    /// ready to send an HTTP request yet.
    pub async fn send_with_client<S, ReqB, ResB>(&self, client: S) -> Response
    where
        S: Service<Request<ReqB>, Response = http::Response<ResB>>,
        ReqB: Default,
        ResB: Body<Data = Bytes>,
    {
        let uri = format!(
            "{}?place_id={}&{}",
            self.geocoder.endpoint,
            percent_encode(self.place_id),
            self.geocoder.base_query(),
        );

        request(uri, client).await
    }
}

impl<'a, K: Borrow<str>> ReverseGeocode<'a, K> {
    /// Restrict the results to the given address types, encoded as the
    /// `result_type` parameter. An empty slice leaves the parameter out.
    pub fn result_types(&mut self, result_types: &'a [AddressType]) -> &mut Self {
        self.result_types = result_types;
        self
    }

    /// Restrict the results to the given location types, encoded as the
    /// `location_type` parameter. An empty slice leaves the parameter out.
    pub fn location_types(&mut self, location_types: &'a [LocationType]) -> &mut Self {
        self.location_types = location_types;
        self
    }

    /// Perform the request with a default `hyper` client.
    ///
    /// # Panics
    ///
    /// This will panic if the underlying HTTPS connector failed to
    /// initialize.
    #[cfg(feature = "hyper")]
    pub async fn send(&self) -> Response {
        let conn = hyper_tls::HttpsConnector::new();
        self.send_with_client(hyper_pkg::Client::builder().build::<_, hyper_pkg::Body>(conn))
            .await
    }

    /// Same as `send` except that it uses `client` to make the HTTP request
    /// to the endpoint.
    ///
    /// # Panics
    ///
    /// This will call `<S as Service>::call` without checking for
    /// `<S as Service>::poll_ready` and may cause a panic if `client` is not
    /// ready to send an HTTP request yet.
    pub async fn send_with_client<S, ReqB, ResB>(&self, client: S) -> Response
    where
        S: Service<Request<ReqB>, Response = http::Response<ResB>>,
        ReqB: Default,
        ResB: Body<Data = Bytes>,
    {
        let latlng = format!("{},{}", self.coordinate.latitude, self.coordinate.longitude);
        let mut uri = format!(
            "{}?latlng={}&{}",
            self.geocoder.endpoint,
            percent_encode(&latlng),
            self.geocoder.base_query(),
        );
        if !self.result_types.is_empty() {
            let value = pipe_join(self.result_types);
            uri.push_str(&format!("&result_type={}", percent_encode(&value)));
        }
        if !self.location_types.is_empty() {
            let value = pipe_join(self.location_types);
            uri.push_str(&format!("&location_type={}", percent_encode(&value)));
        }

        request(uri, client).await
    }
}

/// Issues a GET request for `uri` and decodes the body.
///
/// Every failure mode collapses into the `UNKNOWN_ERROR` placeholder: a URI
/// that does not parse, a transport error, a non-200 status, a body that
/// cannot be read and a body that does not decode are indistinguishable to
/// the caller.
async fn request<S, ReqB, ResB>(uri: String, mut client: S) -> Response
where
    S: Service<Request<ReqB>, Response = http::Response<ResB>>,
    ReqB: Default,
    ResB: Body<Data = Bytes>,
{
    let uri = match uri.parse::<Uri>() {
        Ok(uri) => uri,
        Err(_) => return Response::unknown_error(),
    };

    let req = match Request::get(uri).body(ReqB::default()) {
        Ok(req) => req,
        Err(_) => return Response::unknown_error(),
    };

    let res = match client.call(req).await {
        Ok(res) => res,
        Err(_) => return Response::unknown_error(),
    };

    if http::StatusCode::OK != res.status() {
        return Response::unknown_error();
    }

    let body = HttpBodyAsStream::new(res.into_body())
        .try_fold(Vec::new(), |mut acc, chunk| {
            acc.extend_from_slice(&chunk);
            future::ok(acc)
        })
        .await;
    let body = match body {
        Ok(body) => body,
        Err(_) => return Response::unknown_error(),
    };

    match str::from_utf8(&body).ok().and_then(Response::from_json) {
        Some(res) => res,
        None => Response::unknown_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::convert::Infallible;
    use std::io;

    use futures::executor::block_on;
    use http_body::Full;
    use percent_encoding::percent_decode_str;
    use tower::service_fn;

    const ZERO_RESULTS: &str = "{\"results\": [], \"status\": \"ZERO_RESULTS\"}";

    /// A transport that records the request URI and replies with a canned
    /// status and body.
    fn transport<'a>(
        uri: &'a RefCell<Option<Uri>>,
        status: u16,
        body: &'static str,
    ) -> impl Service<Request<Bytes>, Response = http::Response<Full<Bytes>>, Error = Infallible> + 'a
    {
        service_fn(move |req: Request<Bytes>| {
            *uri.borrow_mut() = Some(req.uri().clone());
            let res = http::Response::builder()
                .status(status)
                .body(Full::new(Bytes::from_static(body.as_bytes())))
                .unwrap();
            futures::future::ready(Ok::<_, Infallible>(res))
        })
    }

    fn decode(s: &str) -> String {
        percent_decode_str(s).decode_utf8().unwrap().into_owned()
    }

    /// Splits a query string into decoded key/value pairs; parameter order
    /// is not part of the contract.
    fn query_pairs(uri: &Uri) -> HashMap<String, String> {
        uri.query()
            .expect("request URI has no query string")
            .split('&')
            .map(|pair| {
                let mut kv = pair.splitn(2, '=');
                let k = kv.next().unwrap();
                let v = kv.next().unwrap_or("");
                (decode(k), decode(v))
            })
            .collect()
    }

    fn expected(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    fn coordinate(lat: &str, lng: &str) -> Coordinate {
        Coordinate::new(lat.parse().unwrap(), lng.parse().unwrap())
    }

    #[test]
    fn forward_geocode_query() {
        let geocoder = Geocoder::new("dummy_api_key");
        let captured = RefCell::new(None);

        block_on(
            geocoder
                .geocode("10 Biruzova Street, Minsk, Belarus")
                .send_with_client(transport(&captured, 200, ZERO_RESULTS)),
        );

        let uri = captured.into_inner().unwrap();
        assert!(uri
            .to_string()
            .starts_with("https://maps.googleapis.com/maps/api/geocode/json?"));
        assert_eq!(
            query_pairs(&uri),
            expected(&[
                ("address", "10 Biruzova Street, Minsk, Belarus"),
                ("key", "dummy_api_key"),
                ("language", "en"),
            ]),
        );
    }

    #[test]
    fn forward_geocode_query_with_bounds() {
        let geocoder = Geocoder::new("dummy_api_key");
        let captured = RefCell::new(None);
        let view_port = ViewPort::new(
            coordinate("34.172684", "-118.604794"),
            coordinate("34.236144", "-118.500938"),
        );

        block_on(
            geocoder
                .geocode("Winnetka")
                .bounds(&view_port)
                .send_with_client(transport(&captured, 200, ZERO_RESULTS)),
        );

        let uri = captured.into_inner().unwrap();
        assert_eq!(
            query_pairs(&uri),
            expected(&[
                ("address", "Winnetka"),
                ("key", "dummy_api_key"),
                ("language", "en"),
                ("bounds", "34.172684,-118.604794|34.236144,-118.500938"),
            ]),
        );
    }

    #[test]
    fn place_id_query() {
        let geocoder = Geocoder::new("dummy_api_key");
        let captured = RefCell::new(None);

        block_on(
            geocoder
                .geocode_place_id("ChIJd8BlQ2BZwokRAFUEcm_qrcA")
                .send_with_client(transport(&captured, 200, ZERO_RESULTS)),
        );

        let uri = captured.into_inner().unwrap();
        let pairs = query_pairs(&uri);
        assert!(!pairs.contains_key("address"));
        assert_eq!(
            pairs,
            expected(&[
                ("place_id", "ChIJd8BlQ2BZwokRAFUEcm_qrcA"),
                ("key", "dummy_api_key"),
                ("language", "en"),
            ]),
        );
    }

    #[test]
    fn reverse_geocode_query() {
        let geocoder = Geocoder::new("dummy_api_key");
        let captured = RefCell::new(None);

        block_on(
            geocoder
                .reverse_geocode(coordinate("40.714224", "-73.961452"))
                .send_with_client(transport(&captured, 200, ZERO_RESULTS)),
        );

        let uri = captured.into_inner().unwrap();
        assert_eq!(
            query_pairs(&uri),
            expected(&[
                ("latlng", "40.714224,-73.961452"),
                ("key", "dummy_api_key"),
                ("language", "en"),
            ]),
        );
    }

    #[test]
    fn reverse_geocode_query_with_type_filters() {
        let geocoder = Geocoder::new("dummy_api_key");
        let captured = RefCell::new(None);

        block_on(
            geocoder
                .reverse_geocode(coordinate("40.714224", "-73.961452"))
                .result_types(&[
                    AddressType::StreetAddress,
                    AddressType::Country,
                    AddressType::Locality,
                ])
                .location_types(&[LocationType::Rooftop, LocationType::Approximate])
                .send_with_client(transport(&captured, 200, ZERO_RESULTS)),
        );

        let uri = captured.into_inner().unwrap();
        assert_eq!(
            query_pairs(&uri),
            expected(&[
                ("latlng", "40.714224,-73.961452"),
                ("key", "dummy_api_key"),
                ("language", "en"),
                ("result_type", "street_address|country|locality"),
                ("location_type", "ROOFTOP|APPROXIMATE"),
            ]),
        );
    }

    #[test]
    fn language_override() {
        let mut geocoder = Geocoder::new("dummy_api_key");
        geocoder.language("ru");
        let captured = RefCell::new(None);

        block_on(
            geocoder
                .geocode("Минск")
                .send_with_client(transport(&captured, 200, ZERO_RESULTS)),
        );

        let uri = captured.into_inner().unwrap();
        let pairs = query_pairs(&uri);
        assert_eq!(pairs["language"], "ru");
        assert_eq!(pairs["address"], "Минск");
    }

    #[test]
    fn decoded_response_is_passed_through() {
        let geocoder = Geocoder::new("dummy_api_key");
        let captured = RefCell::new(None);
        let body = "{\"status\": \"REQUEST_DENIED\", \"error_message\": \"denied\"}";

        let response = block_on(
            geocoder
                .geocode("Winnetka")
                .send_with_client(transport(&captured, 200, body)),
        );

        assert_eq!(response.status_code, StatusCode::RequestDenied);
        assert_eq!(response.error_message.as_deref(), Some("denied"));
    }

    #[test]
    fn non_200_status_collapses() {
        let geocoder = Geocoder::new("dummy_api_key");
        let captured = RefCell::new(None);

        let response = block_on(
            geocoder
                .geocode("Winnetka")
                .send_with_client(transport(&captured, 500, ZERO_RESULTS)),
        );

        assert_eq!(response, Response::unknown_error());
    }

    #[test]
    fn undecodable_body_collapses() {
        let geocoder = Geocoder::new("dummy_api_key");
        let captured = RefCell::new(None);

        let response = block_on(
            geocoder
                .geocode("Winnetka")
                .send_with_client(transport(&captured, 200, "<html>bad gateway</html>")),
        );

        assert_eq!(response, Response::unknown_error());
    }

    #[test]
    fn transport_error_collapses() {
        let geocoder = Geocoder::new("dummy_api_key");
        let client = service_fn(|_: Request<Bytes>| {
            futures::future::ready(Err::<http::Response<Full<Bytes>>, _>(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "no route",
            )))
        });

        let response = block_on(geocoder.geocode("Winnetka").send_with_client(client));

        assert_eq!(response, Response::unknown_error());
    }
}
