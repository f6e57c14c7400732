//! Rpc method signature analysis
//!
//! Raw declarations carry the fixed parameter convention of the binding
//! generator: context, request, response, completion callback. The payload
//! types are recovered positionally, anchored on the literal parameter names
//! `request` and `response`.

use corpc_gen_common::{GeneratorError, MethodDescriptor, Result};

const DECL_PREFIX: &str = "virtual void";

/// The binding generator spells protobuf types through this macro; rewrite it
/// to the real namespace before any type text is captured, as the original
/// declarations would otherwise leak the macro into generated code.
const PB_NAMESPACE_MACRO: &str = "PROTOBUF_NAMESPACE_ID";

/// Convert one raw method declaration into a structured [`MethodDescriptor`].
pub fn analyze_signature(declaration: &str) -> Result<MethodDescriptor> {
    let decl = declaration.replace(PB_NAMESPACE_MACRO, "google::protobuf");

    let rest = decl
        .trim_start()
        .strip_prefix(DECL_PREFIX)
        .ok_or_else(|| malformed(&decl, "missing `virtual void` prefix"))?;

    let open = rest
        .find('(')
        .ok_or_else(|| malformed(&decl, "missing parameter list"))?;
    let method_name = rest[..open].trim();
    if method_name.is_empty() {
        return Err(malformed(&decl, "missing method name"));
    }

    let params: Vec<&str> = rest[open + 1..].split(',').collect();
    if params.len() < 3 {
        return Err(malformed(
            &decl,
            "expected context, request, response and callback parameters",
        ));
    }

    let request_type = payload_type(params[1], "request")
        .ok_or_else(|| malformed(&decl, "second parameter is not the request"))?;
    let response_type = payload_type(params[2], "response")
        .ok_or_else(|| malformed(&decl, "third parameter is not the response"))?;

    Ok(MethodDescriptor::new(
        method_name,
        &request_type,
        &response_type,
    ))
}

/// Bare payload type of one parameter: the text up to the parameter name,
/// stripped of pointer, `const` and whitespace markers.
fn payload_type(param: &str, param_name: &str) -> Option<String> {
    let end = param.find(param_name)?;
    let bare: String = param[..end]
        .replace('*', "")
        .replace("const", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if bare.is_empty() {
        None
    } else {
        Some(bare)
    }
}

fn malformed(declaration: &str, reason: &str) -> GeneratorError {
    GeneratorError::MalformedMethodSignature(format!(
        "{}: [{}]",
        reason,
        declaration.split_whitespace().collect::<Vec<_>>().join(" ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_well_formed_signature() {
        let raw = "virtual void queryOrder(RpcContext* ctx, const QueryReq* request, QueryResp* response, Closure* done);";
        let method = analyze_signature(raw).unwrap();
        assert_eq!(method.method_name, "queryOrder");
        assert_eq!(method.request_type, "QueryReq");
        assert_eq!(method.response_type, "QueryResp");
        assert_eq!(method.interface_class_name, "QueryOrderInterface");
        assert_eq!(method.interface_file_base_name, "query_order");
    }

    #[test]
    fn test_analyze_multiline_signature() {
        let raw = "virtual void queryOrder(RpcContext* ctx,\n\
                      const ::QueryReq* request,\n\
                      ::QueryResp* response,\n\
                      Closure* done);";
        let method = analyze_signature(raw).unwrap();
        assert_eq!(method.request_type, "::QueryReq");
        assert_eq!(method.response_type, "::QueryResp");
    }

    #[test]
    fn test_protobuf_namespace_macro_is_rewritten() {
        let raw = "virtual void ping(PROTOBUF_NAMESPACE_ID::RpcController* controller, const PingReq* request, PingResp* response, PROTOBUF_NAMESPACE_ID::Closure* done);";
        let method = analyze_signature(raw).unwrap();
        assert_eq!(method.method_name, "ping");
        assert_eq!(method.request_type, "PingReq");
    }

    #[test]
    fn test_too_few_parameters() {
        let raw = "virtual void broken(const QueryReq* request);";
        let err = analyze_signature(raw).unwrap_err();
        assert!(matches!(err, GeneratorError::MalformedMethodSignature(_)));
    }

    #[test]
    fn test_missing_request_token() {
        let raw = "virtual void broken(RpcContext* ctx, const QueryReq* req, QueryResp* response, Closure* done);";
        let err = analyze_signature(raw).unwrap_err();
        assert!(matches!(err, GeneratorError::MalformedMethodSignature(_)));
    }

    #[test]
    fn test_missing_response_token() {
        let raw = "virtual void broken(RpcContext* ctx, const QueryReq* request, QueryResp* resp, Closure* done);";
        let err = analyze_signature(raw).unwrap_err();
        assert!(matches!(err, GeneratorError::MalformedMethodSignature(_)));
    }

    #[test]
    fn test_missing_parameter_list() {
        let err = analyze_signature("virtual void broken;").unwrap_err();
        assert!(matches!(err, GeneratorError::MalformedMethodSignature(_)));
    }
}
