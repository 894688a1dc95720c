/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Authenticated HTTP client and request execution
pub mod http;
/// Request specs, query builders and request bodies
pub mod requests;
/// Response envelopes
pub mod responses;
